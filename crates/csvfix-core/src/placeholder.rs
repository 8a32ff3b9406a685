//! Canned assistant replies that ended up in listing descriptions.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Phrases that mark a description as placeholder text, checked in order.
pub const PLACEHOLDER_PHRASES: [&str; 3] = [
    "I'm still learning and can't help with that",
    "I'm still learning",
    "Do you need help with anything else",
];

/// The refusal sentence, optionally followed by its companion question.
/// Words may be separated by any whitespace run so that collapsing
/// whitespace later can never produce a fresh match.
const PASSAGE_PATTERN: &str = r"(?i)I'm\s+still\s+learning\s+and\s+can't\s+help\s+with\s+that\.(?:\s*Do\s+you\s+need\s+help\s+with\s+anything\s+else\?)?";

static PASSAGE: OnceLock<Regex> = OnceLock::new();

pub(crate) fn passage_regex() -> &'static Regex {
    PASSAGE.get_or_init(|| Regex::new(PASSAGE_PATTERN).expect("valid placeholder pattern"))
}

/// Placeholder phrases contained in `text`, ignoring case.
pub fn matching_phrases(text: &str) -> impl Iterator<Item = &'static str> {
    let lowered = text.to_lowercase();
    PLACEHOLDER_PHRASES
        .into_iter()
        .filter(move |phrase| lowered.contains(&phrase.to_lowercase()))
}

/// Remove every placeholder passage, repeating until none is left.
pub fn strip_passages(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = match passage_regex().replace_all(&current, "") {
            Cow::Borrowed(_) => None,
            Cow::Owned(next) => Some(next),
        };
        match next {
            Some(next) => current = next,
            None => return current,
        }
    }
}
