//! Record normalization for listing exports.
//!
//! The pipeline is a single pass: every data row's description is
//! classified against the defect taxonomy, cleaned, and its status is
//! canonicalized or replaced by the reprocessed marker.

pub mod classify;
pub mod clean;
pub mod dataset;
pub mod placeholder;
pub mod status;

pub use classify::classify;
pub use clean::clean;
pub use dataset::{
    NormalizationOutcome, NormalizedDataset, RowResult, normalize_row, process_dataset,
    resolve_columns,
};
pub use status::{SOLD, normalize_status};
