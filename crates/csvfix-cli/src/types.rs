use std::path::PathBuf;

use csvfix_model::{ColumnIndices, NormalizationReport};

/// Everything the console report needs after a run.
#[derive(Debug)]
pub struct FixResult {
    pub input: PathBuf,
    /// Cleaned CSV location; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub column_count: usize,
    pub columns: ColumnIndices,
    pub report: NormalizationReport,
}
