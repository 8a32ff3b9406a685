use std::sync::OnceLock;

use regex::Regex;

use crate::placeholder::strip_passages;

static SPACE_RUN: OnceLock<Regex> = OnceLock::new();
static LINE_BREAK_RUN: OnceLock<Regex> = OnceLock::new();

fn space_run() -> &'static Regex {
    SPACE_RUN.get_or_init(|| Regex::new(" {2,}").expect("valid space pattern"))
}

fn line_break_run() -> &'static Regex {
    LINE_BREAK_RUN.get_or_init(|| Regex::new("[\r\n]+").expect("valid line break pattern"))
}

/// Clean a description field.
///
/// Removes placeholder passages, collapses space runs, turns line breaks
/// into spaces, trims, and drops trailing commas. `clean(clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    let without_placeholders = strip_passages(text);
    let collapsed = space_run().replace_all(&without_placeholders, " ");
    let single_line = line_break_run().replace_all(&collapsed, " ");
    // A line break between two spaces leaves a fresh run behind.
    let single_line = space_run().replace_all(&single_line, " ");

    let mut cleaned = single_line.trim();
    while let Some(stripped) = cleaned.strip_suffix(',') {
        cleaned = stripped.trim_end();
    }
    cleaned.to_string()
}
