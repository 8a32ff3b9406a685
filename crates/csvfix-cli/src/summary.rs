use std::fmt::Write as _;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvfix_model::{DefectEntry, NormalizationReport};

use crate::types::FixResult;

const RULE_WIDTH: usize = 80;

pub fn print_summary(result: &FixResult) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("Input CSV file: {}", result.input.display());
    println!("{rule}");
    println!("Columns found: {}", result.column_count);
    println!("Status column index: {}", result.columns.status);
    println!("Description column index: {}", result.columns.description);
    println!("ID column index: {}", result.columns.id);
    println!("{rule}");
    println!();
    println!("{rule}");
    println!("ISSUES FOUND: {}", result.report.defect_count());
    println!("{rule}");
    print!("{}", render_defect_details(&result.report));
    println!();
    println!("{rule}");
    match &result.output {
        Some(path) => println!("Wrote fixed CSV to: {}", path.display()),
        None => println!("Dry run: no CSV written"),
    }
    if let Some(path) = &result.report_json {
        println!("Wrote report JSON to: {}", path.display());
    }
    println!("{}", summary_table(&result.report));
    println!("Done!");
}

pub fn defect_heading(entry: &DefectEntry) -> String {
    format!("Row {} (ID: {}):", entry.row, entry.id)
}

/// Detail block for the displayed defect entries, followed by a count of
/// the entries left out.
pub fn render_defect_details(report: &NormalizationReport) -> String {
    let mut out = String::new();
    for entry in report.displayed_defects() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", defect_heading(entry));
        let _ = writeln!(out, "  Current Status: {}", entry.status);
        let _ = writeln!(out, "  Issues: {}", entry.describe());
        let _ = writeln!(out, "  Description preview: {}", entry.preview);
    }
    let hidden = report.hidden_defect_count();
    if hidden > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "... and {hidden} more issues");
    }
    out
}

pub fn summary_table(report: &NormalizationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Summary"), header_cell("Rows")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new("Rows with defects"),
        count_cell(report.defect_count(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rows modified"),
        count_cell(report.modified_rows, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Rows passed through (malformed)"),
        count_cell(report.warnings.len(), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Total rows processed").add_attribute(Attribute::Bold),
        Cell::new(report.total_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
