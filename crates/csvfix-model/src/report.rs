use serde::{Deserialize, Serialize};

use crate::defect::{Defect, join_defects};

/// Resolved positions of the columns the normalizer touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnIndices {
    pub status: usize,
    pub description: usize,
    pub id: usize,
}

impl ColumnIndices {
    /// Minimum field count a row needs to be normalized.
    ///
    /// The id column is excluded: a row that only lacks its id is still
    /// cleaned and reports `N/A` as its id.
    pub fn required_width(&self) -> usize {
        self.status.max(self.description) + 1
    }
}

/// A row whose description had at least one defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectEntry {
    /// File row number; the header is row 1.
    pub row: usize,
    pub id: String,
    /// Status as read, before normalization.
    pub status: String,
    pub preview: String,
    pub defects: Vec<Defect>,
}

impl DefectEntry {
    pub fn describe(&self) -> String {
        join_defects(&self.defects)
    }
}

/// A row too short to reach the required columns; passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    pub row: usize,
    pub field_count: usize,
}

/// Summary of one normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Data rows seen, including malformed ones.
    pub total_rows: usize,
    /// Rows whose status or description changed.
    pub modified_rows: usize,
    #[serde(skip)]
    pub max_displayed: usize,
    pub defects: Vec<DefectEntry>,
    pub warnings: Vec<RowWarning>,
}

impl NormalizationReport {
    pub fn new(max_displayed: usize) -> Self {
        Self {
            max_displayed,
            ..Self::default()
        }
    }

    pub fn defect_count(&self) -> usize {
        self.defects.len()
    }

    /// The leading entries meant for console display.
    pub fn displayed_defects(&self) -> &[DefectEntry] {
        let end = self.defects.len().min(self.max_displayed);
        &self.defects[..end]
    }

    pub fn hidden_defect_count(&self) -> usize {
        self.defects.len().saturating_sub(self.max_displayed)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
