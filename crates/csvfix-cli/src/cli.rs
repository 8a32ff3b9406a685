//! CLI argument definitions for the listing cleaner.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

use csvfix_model::{
    ColumnNames, DEFAULT_MARKER, DEFAULT_MAX_REPORT_ENTRIES, NormalizeOptions,
};

#[derive(Parser)]
#[command(
    name = "csvfix",
    version,
    about = "Clean listing descriptions and normalize statuses in a CSV export",
    long_about = "Check the description column of a listing export for placeholder text,\n\
                  whitespace and punctuation problems, write a cleaned copy, and mark\n\
                  every reprocessed row in the status column (sold rows excepted)."
)]
pub struct Cli {
    /// CSV export to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (default: <INPUT stem>_FIXED.<ext>).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Header of the status column.
    #[arg(long = "status-column", default_value = "Status")]
    pub status_column: String,

    /// Header of the description column.
    #[arg(long = "description-column", default_value = "description - p")]
    pub description_column: String,

    /// Header of the id column.
    #[arg(long = "id-column", default_value = "id")]
    pub id_column: String,

    /// Status written to reprocessed rows.
    #[arg(long = "marker", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Number of defective rows listed in the console report.
    #[arg(long = "max-report-entries", default_value_t = DEFAULT_MAX_REPORT_ENTRIES)]
    pub max_report_entries: usize,

    /// Classify and report without writing the cleaned CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also write the full report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

impl Cli {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions::new()
            .with_columns(ColumnNames {
                status: self.status_column.clone(),
                description: self.description_column.clone(),
                id: self.id_column.clone(),
            })
            .with_marker(self.marker.clone())
            .with_max_report_entries(self.max_report_entries)
    }

    /// The explicit `--output` path, or the input path with `_FIXED` added to its stem.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Build logging configuration from CLI flags with consistent precedence.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            with_timestamps: self.log_timestamps,
            with_target: self.log_target,
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}

pub fn default_output_path(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_FIXED.{}", ext.to_string_lossy()),
        None => format!("{stem}_FIXED"),
    };
    input.with_file_name(name)
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
