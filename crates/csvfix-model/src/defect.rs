//! Defect taxonomy for listing descriptions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A kind of textual malformation found in one description field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    /// Empty or whitespace-only text. No other checks run after this one.
    EmptyText,
    /// Text contains a canned assistant reply instead of a description.
    PlaceholderText {
        /// The placeholder phrase that matched.
        phrase: String,
    },
    DoubleSpace,
    EdgeWhitespace,
    EmbeddedNewline,
    /// Fewer than 3 characters once trimmed.
    TooShort,
    TrailingComma,
}

impl Defect {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Defect::EmptyText => "empty_text",
            Defect::PlaceholderText { .. } => "placeholder_text",
            Defect::DoubleSpace => "double_space",
            Defect::EdgeWhitespace => "edge_whitespace",
            Defect::EmbeddedNewline => "embedded_newline",
            Defect::TooShort => "too_short",
            Defect::TrailingComma => "trailing_comma",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::EmptyText => f.write_str("Empty description"),
            Defect::PlaceholderText { phrase } => {
                write!(f, "Contains AI placeholder text: '{phrase}'")
            }
            Defect::DoubleSpace => f.write_str("Contains double spaces"),
            Defect::EdgeWhitespace => f.write_str("Has leading/trailing whitespace"),
            Defect::EmbeddedNewline => f.write_str("Contains embedded newlines"),
            Defect::TooShort => f.write_str("Description too short (less than 3 characters)"),
            Defect::TrailingComma => f.write_str("Description ends with trailing comma"),
        }
    }
}

/// Outcome of classifying one description field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Defects in rule evaluation order.
    pub defects: Vec<Defect>,
}

impl ClassificationResult {
    pub fn has_defects(&self) -> bool {
        !self.defects.is_empty()
    }

    pub fn contains(&self, defect: &Defect) -> bool {
        self.defects.contains(defect)
    }

    /// Human-readable messages joined with `", "`.
    pub fn describe(&self) -> String {
        join_defects(&self.defects)
    }
}

pub(crate) fn join_defects(defects: &[Defect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_message_names_phrase() {
        let defect = Defect::PlaceholderText {
            phrase: "I'm still learning".to_string(),
        };
        assert_eq!(
            defect.to_string(),
            "Contains AI placeholder text: 'I'm still learning'"
        );
        assert_eq!(defect.code(), "placeholder_text");
    }

    #[test]
    fn describe_joins_in_order() {
        let result = ClassificationResult {
            defects: vec![Defect::DoubleSpace, Defect::TrailingComma],
        };
        assert!(result.has_defects());
        assert_eq!(
            result.describe(),
            "Contains double spaces, Description ends with trailing comma"
        );
    }
}
