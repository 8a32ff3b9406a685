use csvfix_core::classify;
use csvfix_model::Defect;

fn placeholder(phrase: &str) -> Defect {
    Defect::PlaceholderText {
        phrase: phrase.to_string(),
    }
}

#[test]
fn clean_description_has_no_defects() {
    let result = classify("Sea view villa");
    assert!(!result.has_defects());
    assert!(result.defects.is_empty());
}

#[test]
fn blank_text_is_only_empty() {
    for text in ["", "   ", "\n\t "] {
        let result = classify(text);
        assert_eq!(result.defects, vec![Defect::EmptyText], "input {text:?}");
    }
}

#[test]
fn full_refusal_reports_every_matching_phrase() {
    let result = classify(
        "I'm still learning and can't help with that. Do you need help with anything else?",
    );
    assert_eq!(
        result.defects,
        vec![
            placeholder("I'm still learning and can't help with that"),
            placeholder("I'm still learning"),
            placeholder("Do you need help with anything else"),
        ]
    );
}

#[test]
fn placeholder_match_ignores_case() {
    let result = classify("i'M sTiLl LeArNiNg");
    assert_eq!(result.defects, vec![placeholder("I'm still learning")]);
}

#[test]
fn whitespace_defects_in_rule_order() {
    let result = classify(" Two  bed\nflat, ");
    assert_eq!(
        result.defects,
        vec![
            Defect::DoubleSpace,
            Defect::EdgeWhitespace,
            Defect::EmbeddedNewline,
            Defect::TrailingComma,
        ]
    );
}

#[test]
fn carriage_return_counts_as_newline() {
    assert!(classify("Flat\rwith garden").contains(&Defect::EmbeddedNewline));
}

#[test]
fn short_text_is_flagged_after_trimming() {
    let result = classify(" ab ");
    assert_eq!(result.defects, vec![Defect::EdgeWhitespace, Defect::TooShort]);
    assert!(!classify("abc").has_defects());
}

#[test]
fn trailing_comma_is_flagged() {
    let result = classify("Cozy studio,");
    assert_eq!(result.defects, vec![Defect::TrailingComma]);
    assert_eq!(result.describe(), "Description ends with trailing comma");
}
