//! Search-term generation from identifiers.
//!
//! `ThisIsAnExample` yields the parts `this, is, an, example` followed by the
//! cumulative prefixes `thisis, thisisan, thisisanexample`, so both a single
//! word and a run of leading words find the item.

use crate::types::Term;

/// Generates search terms for a PascalCase or camelCase identifier.
///
/// Parts are split before every uppercase letter and at any
/// non-alphanumeric character. Duplicate terms keep their first position.
pub fn identifier_terms(identifier: &str) -> Vec<Term> {
    let parts = split_identifier(identifier);
    let mut terms = Vec::with_capacity(parts.len() * 2);

    for part in &parts {
        push_unique(&mut terms, Term::from(part));
    }

    let mut cumulative = String::new();
    for (i, part) in parts.iter().enumerate() {
        cumulative.push_str(part);
        if i > 0 {
            push_unique(&mut terms, Term::from(&cumulative));
        }
    }

    terms
}

/// Concatenates the terms of several identifiers, dropping repeats.
pub fn terms_from_names<I, S>(names: I) -> Vec<Term>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut terms = Vec::new();
    for name in names {
        for term in identifier_terms(name.as_ref()) {
            push_unique(&mut terms, term);
        }
    }
    terms
}

fn split_identifier(identifier: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for c in identifier.chars() {
        if !c.is_alphanumeric() {
            flush(&mut parts, &mut current);
            continue;
        }
        if c.is_uppercase() {
            flush(&mut parts, &mut current);
        }
        current.extend(c.to_lowercase());
    }
    flush(&mut parts, &mut current);

    parts
}

fn flush(parts: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        parts.push(std::mem::take(current));
    }
}

fn push_unique(terms: &mut Vec<Term>, term: Term) {
    if !terms.contains(&term) {
        terms.push(term);
    }
}
