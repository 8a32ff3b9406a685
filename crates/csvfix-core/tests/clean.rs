use csvfix_core::{classify, clean};
use csvfix_model::Defect;
use proptest::prelude::*;

#[test]
fn collapses_double_spaces() {
    assert_eq!(clean("Nice flat, spacious  room"), "Nice flat, spacious room");
}

#[test]
fn refusal_text_cleans_to_empty() {
    let text = "I'm still learning and can't help with that. Do you need help with anything else?";
    assert_eq!(clean(text), "");
}

#[test]
fn refusal_removed_from_inside_description() {
    let text = "3 bed house. I'M STILL LEARNING AND CAN'T HELP WITH THAT.\nGarden.";
    assert_eq!(clean(text), "3 bed house. Garden.");
}

#[test]
fn line_breaks_become_single_spaces() {
    assert_eq!(clean("Line one\r\n\r\nLine two\nLine three"), "Line one Line two Line three");
}

#[test]
fn trims_and_strips_trailing_comma() {
    assert_eq!(clean("Cozy studio,"), "Cozy studio");
    assert_eq!(clean("  Cozy studio , "), "Cozy studio");
}

#[test]
fn blank_stays_blank() {
    assert_eq!(clean(""), "");
    assert_eq!(clean(" \n "), "");
}

#[test]
fn already_clean_text_is_unchanged() {
    let text = "Sea view villa, 4 bedrooms";
    assert_eq!(clean(text), text);
}

#[test]
fn clean_output_summary_is_stable() {
    let cleaned = clean("  Penthouse,  rooftop\n terrace,, ");
    insta::assert_snapshot!(cleaned, @"Penthouse, rooftop terrace");
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("I'm still learning and can't help with that.".to_string()),
        Just("Do you need help with anything else?".to_string()),
        Just("i'm  still\nlearning and can't help with that.".to_string()),
        Just("I'm still learning".to_string()),
        Just("  ".to_string()),
        Just(",".to_string()),
        Just("\r\n".to_string()),
        "[a-zA-Z0-9 ,.'?\t\r\n]{0,12}",
    ]
}

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn clean_is_idempotent(text in description()) {
        let once = clean(&text);
        prop_assert_eq!(clean(&once), once);
    }

    #[test]
    fn cleaned_text_has_no_whitespace_defects(text in description()) {
        let cleaned = clean(&text);
        let result = classify(&cleaned);
        prop_assert!(!result.contains(&Defect::DoubleSpace));
        prop_assert!(!result.contains(&Defect::EdgeWhitespace));
        prop_assert!(!result.contains(&Defect::EmbeddedNewline));
        prop_assert!(!result.contains(&Defect::TrailingComma));
    }

    #[test]
    fn double_space_is_always_reported(prefix in "[a-z]{1,6}", suffix in "[a-z]{0,6}") {
        let text = format!("{prefix}  {suffix}");
        prop_assert!(classify(&text).contains(&Defect::DoubleSpace));
    }
}
