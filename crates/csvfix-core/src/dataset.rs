//! Whole-dataset normalization.

use tracing::{debug, info, info_span, warn};

use csvfix_model::{
    ColumnIndices, ColumnNames, Defect, DefectEntry, NormalizationReport, NormalizeError,
    NormalizeOptions, Result, RowWarning,
};

use crate::classify::classify;
use crate::clean::clean;
use crate::status::{SOLD, normalize_status};

/// Id shown for rows too short to reach the id column.
const MISSING_ID: &str = "N/A";

/// One row after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizationOutcome {
    pub row: Vec<String>,
    /// Whether the description or status differs from the input.
    pub was_modified: bool,
}

/// What happened to a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowResult {
    /// Too short to normalize; emitted unchanged.
    PassThrough { row: Vec<String>, warning: RowWarning },
    Normalized {
        outcome: NormalizationOutcome,
        defect: Option<DefectEntry>,
    },
}

impl RowResult {
    pub fn into_row(self) -> Vec<String> {
        match self {
            RowResult::PassThrough { row, .. } => row,
            RowResult::Normalized { outcome, .. } => outcome.row,
        }
    }
}

/// Output rows in input order, plus the run report.
#[derive(Debug, Clone)]
pub struct NormalizedDataset {
    pub columns: ColumnIndices,
    pub rows: Vec<Vec<String>>,
    pub report: NormalizationReport,
}

/// Locate the status, description and id columns by exact header name.
///
/// A leading byte-order mark on the first header cell is ignored.
pub fn resolve_columns(headers: &[String], names: &ColumnNames) -> Result<ColumnIndices> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}') == name)
            .ok_or_else(|| NormalizeError::MissingColumn {
                column: name.to_string(),
                available: headers.to_vec(),
            })
    };
    Ok(ColumnIndices {
        status: find(&names.status)?,
        description: find(&names.description)?,
        id: find(&names.id)?,
    })
}

/// Normalize a single data row. `row_number` counts the header as row 1.
pub fn normalize_row(
    row_number: usize,
    row: &[String],
    columns: ColumnIndices,
    options: &NormalizeOptions,
) -> RowResult {
    if row.len() < columns.required_width() {
        warn!(
            row = row_number,
            fields = row.len(),
            "row has insufficient columns, passing through"
        );
        return RowResult::PassThrough {
            row: row.to_vec(),
            warning: RowWarning {
                row: row_number,
                field_count: row.len(),
            },
        };
    }

    let description = &row[columns.description];
    let status = &row[columns.status];
    let classification = classify(description);
    let defect = classification.has_defects().then(|| DefectEntry {
        row: row_number,
        id: row
            .get(columns.id)
            .cloned()
            .unwrap_or_else(|| MISSING_ID.to_string()),
        status: status.clone(),
        preview: preview(description, options.preview_chars),
        defects: classification.defects.clone(),
    });

    let cleaned = clean(description);
    let normalized = normalize_status(status);
    let reprocessed = classification.has_defects() || cleaned != *description;
    let new_status = if reprocessed && normalized != SOLD {
        options.marker.clone()
    } else {
        normalized
    };
    let was_modified = cleaned != *description || new_status != *status;
    if let Some(entry) = &defect {
        let codes: Vec<&str> = entry.defects.iter().map(Defect::code).collect();
        debug!(row = row_number, id = %entry.id, defects = ?codes, "description defects");
    }

    let mut output = row.to_vec();
    output[columns.description] = cleaned;
    output[columns.status] = new_status;
    RowResult::Normalized {
        outcome: NormalizationOutcome {
            row: output,
            was_modified,
        },
        defect,
    }
}

/// Normalize every data row in order.
///
/// Fails before touching any row when the header is empty or a required
/// column is missing. Malformed rows never fail the run.
pub fn process_dataset(
    headers: &[String],
    rows: &[Vec<String>],
    options: &NormalizeOptions,
) -> Result<NormalizedDataset> {
    if headers.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }
    let columns = resolve_columns(headers, &options.columns)?;
    let span = info_span!("normalize", rows = rows.len());
    let _guard = span.enter();
    debug!(
        status = columns.status,
        description = columns.description,
        id = columns.id,
        "resolved columns"
    );

    let mut report = NormalizationReport::new(options.max_report_entries);
    let mut output = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        report.total_rows += 1;
        match normalize_row(index + 2, row, columns, options) {
            RowResult::PassThrough { row, warning } => {
                report.warnings.push(warning);
                output.push(row);
            }
            RowResult::Normalized { outcome, defect } => {
                if outcome.was_modified {
                    report.modified_rows += 1;
                }
                report.defects.extend(defect);
                output.push(outcome.row);
            }
        }
    }
    info!(
        total = report.total_rows,
        defects = report.defect_count(),
        modified = report.modified_rows,
        warnings = report.warnings.len(),
        "normalization finished"
    );
    Ok(NormalizedDataset {
        columns,
        rows: output,
        report,
    })
}

fn preview(description: &str, limit: usize) -> String {
    if description.chars().count() > limit {
        let mut preview: String = description.chars().take(limit).collect();
        preview.push_str("...");
        preview
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_with_ellipsis() {
        let long = "x".repeat(120);
        let shown = preview(&long, 100);
        assert_eq!(shown.len(), 103);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview(&"y".repeat(100), 100), "y".repeat(100));
    }

    #[test]
    fn required_width_ignores_id_column() {
        let columns = ColumnIndices {
            status: 1,
            description: 0,
            id: 4,
        };
        let result = normalize_row(
            2,
            &["Loft,".to_string(), "done".to_string()],
            columns,
            &NormalizeOptions::default(),
        );
        let RowResult::Normalized { outcome, defect } = result else {
            panic!("row should be normalized");
        };
        assert_eq!(outcome.row, vec!["Loft", "done by antigravity"]);
        assert_eq!(defect.expect("defect entry").id, "N/A");
    }
}
