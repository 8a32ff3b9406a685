use csvfix_model::{ClassificationResult, Defect};

use crate::placeholder::matching_phrases;

const MIN_DESCRIPTION_CHARS: usize = 3;

/// Classify one description field against the defect taxonomy.
///
/// Rules are independent and reported in evaluation order, except that an
/// empty field yields `EmptyText` alone.
pub fn classify(text: &str) -> ClassificationResult {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ClassificationResult {
            defects: vec![Defect::EmptyText],
        };
    }

    let mut defects: Vec<Defect> = matching_phrases(text)
        .map(|phrase| Defect::PlaceholderText {
            phrase: phrase.to_string(),
        })
        .collect();
    if text.contains("  ") {
        defects.push(Defect::DoubleSpace);
    }
    if text != trimmed {
        defects.push(Defect::EdgeWhitespace);
    }
    if text.contains(['\n', '\r']) {
        defects.push(Defect::EmbeddedNewline);
    }
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        defects.push(Defect::TooShort);
    }
    if trimmed.ends_with(',') {
        defects.push(Defect::TrailingComma);
    }
    ClassificationResult { defects }
}
