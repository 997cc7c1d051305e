use nutype::nutype;

/// A canonical search term.
///
/// Construction lower-cases the input, so two terms compare equal iff their
/// case-folded forms are equal. Index keys and BK-tree nodes both use this
/// type, which keeps canonicalization uniform across the engine.
#[nutype(
    sanitize(lowercase),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        From,
        Into,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Term(String);

impl From<&String> for Term {
    fn from(value: &String) -> Self {
        Term::new(value.clone())
    }
}

impl From<&Term> for Term {
    fn from(value: &Term) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests;
