//! Ranked search result type.

/// A search hit paired with the item's term closest to the query.
///
/// `matched_term` is the term as the item declared it, for highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult<T> {
    pub matched_term: String,
    pub item: T,
}
