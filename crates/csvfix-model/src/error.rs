use thiserror::Error;

/// Dataset-level failures. Row-shape problems are not errors; they end up
/// as [`crate::RowWarning`] entries in the report.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("required column not found: '{column}' (available columns: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("no rows found in CSV file")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
