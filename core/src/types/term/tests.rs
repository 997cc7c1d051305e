use super::*;

#[test]
fn term_is_lowercased() {
    let term = Term::from("SearchSettings");
    assert_eq!(term.as_str(), "searchsettings");
}

#[test]
fn term_equality_ignores_case() {
    assert_eq!(Term::from("Arcanum"), Term::from("ARCANUM"));
    assert_ne!(Term::from("arcanum"), Term::from("arcana"));
}

#[test]
fn term_keeps_empty_string() {
    let term = Term::from("");
    assert!(term.is_empty());
}

#[test]
fn term_lowercases_non_ascii() {
    assert_eq!(Term::from("ÄÖÜ").as_str(), "äöü");
}

#[test]
fn term_from_owned_string() {
    let term = Term::from(String::from("Fuzzy"));
    assert_eq!(term.to_string(), "fuzzy");
}
