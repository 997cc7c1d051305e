//! Inverted index from canonical term to the items declaring it.

use std::collections::BTreeMap;
use termdex_core::Term;

/// Outcome of [`InvertedIndex::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The item was not registered under the term.
    NotFound,
    /// One entry was removed and the bucket still has items.
    Removed,
    /// The last entry was removed and the bucket deleted.
    BucketDropped,
}

/// Maps each canonical term to the items registered under it.
///
/// Buckets keep registration order and are never empty; an item that
/// registers the same term twice appears twice.
#[derive(Debug, Clone)]
pub struct InvertedIndex<T> {
    buckets: BTreeMap<Term, Vec<T>>,
}

impl<T> Default for InvertedIndex<T> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<T> InvertedIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct terms with at least one item.
    pub fn term_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.buckets.contains_key(&Term::from(term))
    }

    /// Iterates over the live terms in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.buckets.keys()
    }

    pub fn add(&mut self, item: T, term: impl Into<Term>) {
        self.buckets.entry(term.into()).or_default().push(item);
    }

    /// Items registered under `term`, or an empty slice.
    pub fn lookup(&self, term: &str) -> &[T] {
        self.buckets
            .get(&Term::from(term))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Buckets whose term starts with `prefix`, in term order.
    pub fn lookup_prefix(&self, prefix: &str) -> impl Iterator<Item = (&Term, &[T])> {
        let prefix = Term::from(prefix);
        self.buckets
            .range(prefix.clone()..)
            .take_while(move |(term, _)| term.starts_with(prefix.as_str()))
            .map(|(term, items)| (term, items.as_slice()))
    }
}

impl<T: PartialEq> InvertedIndex<T> {
    /// Removes the first occurrence of `item` under `term`.
    pub fn remove(&mut self, item: &T, term: impl Into<Term>) -> Removal {
        let term = term.into();
        let Some(bucket) = self.buckets.get_mut(&term) else {
            return Removal::NotFound;
        };
        let Some(pos) = bucket.iter().position(|existing| existing == item) else {
            return Removal::NotFound;
        };

        bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&term);
            Removal::BucketDropped
        } else {
            Removal::Removed
        }
    }
}
