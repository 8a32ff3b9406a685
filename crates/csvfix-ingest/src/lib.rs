pub mod csv_table;
pub mod error;

pub use csv_table::{CsvTable, read_csv_table, read_csv_text, write_csv_table, write_csv_to};
pub use error::{IngestError, Result};
