pub mod defect;
pub mod error;
pub mod options;
pub mod report;

pub use defect::{ClassificationResult, Defect};
pub use error::{NormalizeError, Result};
pub use options::{
    ColumnNames, DEFAULT_MARKER, DEFAULT_MAX_REPORT_ENTRIES, DEFAULT_PREVIEW_CHARS,
    NormalizeOptions,
};
pub use report::{ColumnIndices, DefectEntry, NormalizationReport, RowWarning};
