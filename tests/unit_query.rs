// tests/unit_query.rs
//! Tests for raw query parsing: phrase mode, term mode, connectives.

use linkrank_core::engine::query::{parse, ParsedQuery, QueryMode};

fn terms_of(raw: &str) -> (Vec<String>, QueryMode) {
    match parse(raw) {
        ParsedQuery::Terms { terms, mode } => (terms, mode),
        ParsedQuery::Phrase(p) => panic!("expected terms, got phrase {p:?}"),
    }
}

#[test]
fn test_quoted_query_is_phrase() {
    assert_eq!(
        parse("\"Exact Phrase\""),
        ParsedQuery::Phrase("Exact Phrase".to_string())
    );
}

#[test]
fn test_phrase_keeps_case() {
    assert_eq!(
        parse("\"CaSe MaTtErS\""),
        ParsedQuery::Phrase("CaSe MaTtErS".to_string())
    );
}

#[test]
fn test_unterminated_phrase_still_drops_last_char() {
    // Only the leading quote selects phrase mode; the final character is
    // dropped whether or not it is a closing quote.
    assert_eq!(parse("\"cats"), ParsedQuery::Phrase("cat".to_string()));
}

#[test]
fn test_lone_quote_is_empty_phrase() {
    assert_eq!(parse("\""), ParsedQuery::Phrase(String::new()));
    assert_eq!(parse("\"\""), ParsedQuery::Phrase(String::new()));
}

#[test]
fn test_terms_are_lowercased() {
    let (terms, mode) = terms_of("Cats DOGS");
    assert_eq!(terms, vec!["cats", "dogs"]);
    assert_eq!(mode, QueryMode::Any);
}

#[test]
fn test_and_selects_all_mode_and_stays_literal() {
    let (terms, mode) = terms_of("cats and dogs");
    assert_eq!(terms, vec!["cats", "and", "dogs"]);
    assert_eq!(mode, QueryMode::All);
}

#[test]
fn test_last_connective_wins() {
    let (_, mode) = terms_of("a and b or c");
    assert_eq!(mode, QueryMode::Any);

    let (_, mode) = terms_of("a or b and c");
    assert_eq!(mode, QueryMode::All);
}

#[test]
fn test_uppercase_connective_counts() {
    // Lowercasing happens before connective detection.
    let (terms, mode) = terms_of("cats AND dogs");
    assert_eq!(terms, vec!["cats", "and", "dogs"]);
    assert_eq!(mode, QueryMode::All);
}

#[test]
fn test_consecutive_spaces_yield_empty_terms() {
    let (terms, _) = terms_of("cats  dogs");
    assert_eq!(terms, vec!["cats", "", "dogs"]);
}

#[test]
fn test_empty_query_is_single_empty_term() {
    let (terms, mode) = terms_of("");
    assert_eq!(terms, vec![""]);
    assert_eq!(mode, QueryMode::Any);
}

#[test]
fn test_quote_inside_query_does_not_select_phrase_mode() {
    let (terms, _) = terms_of("say \"hi\"");
    assert_eq!(terms, vec!["say", "\"hi\""]);
}
