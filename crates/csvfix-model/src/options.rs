//! Configuration options for listing cleanup.

use serde::{Deserialize, Serialize};

/// Status written to rows whose description was altered.
pub const DEFAULT_MARKER: &str = "done by antigravity";

/// Number of defect entries shown in the console report.
pub const DEFAULT_MAX_REPORT_ENTRIES: usize = 50;

/// Characters of the description kept in a report preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Header names of the columns the normalizer reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub status: String,
    pub description: String,
    pub id: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            status: "Status".to_string(),
            description: "description - p".to_string(),
            id: "id".to_string(),
        }
    }
}

/// Options for a normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    pub columns: ColumnNames,
    /// Status assigned to reprocessed rows (never applied to sold rows).
    pub marker: String,
    /// Preview length for defect entries.
    pub preview_chars: usize,
    /// Console display cap; the report always keeps every entry.
    pub max_report_entries: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            marker: DEFAULT_MARKER.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            max_report_entries: DEFAULT_MAX_REPORT_ENTRIES,
        }
    }
}

impl NormalizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_max_report_entries(mut self, max: usize) -> Self {
        self.max_report_entries = max;
        self
    }
}
