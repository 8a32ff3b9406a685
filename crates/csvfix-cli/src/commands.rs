use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use csvfix_core::process_dataset;
use csvfix_ingest::{CsvTable, read_csv_table, write_csv_table};
use csvfix_model::{NormalizationReport, NormalizeOptions};

use crate::cli::Cli;
use crate::types::FixResult;

/// Read, normalize and write one export as configured on the command line.
pub fn run_fix(cli: &Cli) -> Result<FixResult> {
    let output = (!cli.dry_run).then(|| cli.output_path());
    fix_file(
        &cli.input,
        output.as_deref(),
        cli.report_json.as_deref(),
        &cli.normalize_options(),
    )
}

/// Normalize `input`, writing the cleaned CSV to `output` when given.
///
/// Nothing is written when the header cannot be resolved.
pub fn fix_file(
    input: &Path,
    output: Option<&Path>,
    report_json: Option<&Path>,
    options: &NormalizeOptions,
) -> Result<FixResult> {
    let span = info_span!("fix", input = %input.display());
    let _guard = span.enter();

    info!(path = %input.display(), "reading input csv");
    let table = read_csv_table(input)
        .with_context(|| format!("read input csv: {}", input.display()))?;
    info!(rows = table.rows.len(), columns = table.headers.len(), "loaded input");

    let normalized = process_dataset(&table.headers, &table.rows, options)
        .with_context(|| format!("normalize {}", input.display()))?;
    info!(
        status = normalized.columns.status,
        description = normalized.columns.description,
        id = normalized.columns.id,
        "resolved column indices"
    );

    let column_count = table.headers.len();
    if let Some(path) = output {
        let fixed = CsvTable::new(table.headers, normalized.rows).with_bom(table.bom);
        write_csv_table(path, &fixed)
            .with_context(|| format!("write output csv: {}", path.display()))?;
        info!(path = %path.display(), rows = fixed.rows.len(), "wrote cleaned csv");
    }
    if let Some(path) = report_json {
        write_report_json(path, &normalized.report)?;
    }

    Ok(FixResult {
        input: input.to_path_buf(),
        output: output.map(Path::to_path_buf),
        report_json: report_json.map(Path::to_path_buf),
        column_count,
        columns: normalized.columns,
        report: normalized.report,
    })
}

fn write_report_json(path: &Path, report: &NormalizationReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create report json: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("write report json: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush report json: {}", path.display()))?;
    info!(path = %path.display(), "wrote report json");
    Ok(())
}
