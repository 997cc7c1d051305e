mod query;

use crate::bk_tree::BkTree;
use crate::config::SearchConfig;
use crate::index::{InvertedIndex, Removal};
use crate::ranking;
use crate::results::RankedResult;
use std::collections::HashSet;
use std::hash::Hash;
use termdex_core::{Searchable, Term};
use tracing::{debug, trace};

/// Counters describing the engine's current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Term registrations applied since the engine was created.
    pub term_insertions: usize,
    /// Term registrations removed since the engine was created.
    pub term_removals: usize,
    /// Terms with at least one registered item.
    pub indexed_terms: usize,
    /// Nodes in the BK-tree, including stale ones.
    pub tree_terms: usize,
    /// Index buckets dropped since the tree was last rebuilt.
    pub stale_terms: usize,
}

/// Term search over an inverted index and a BK-tree.
///
/// Writes keep both structures in step. Removing an item only touches the
/// index, so the tree can hold terms that no longer resolve to any item;
/// such terms cost a wasted lookup until `maintenance_compact` rebuilds the
/// tree from the live term set.
///
/// The engine does no locking. Construct one per owner and pass it by
/// reference.
pub struct SearchEngine<T> {
    index: InvertedIndex<T>,
    tree: BkTree,
    config: SearchConfig,
    term_insertions: usize,
    term_removals: usize,
    stale_terms: usize,
}

impl<T> Default for SearchEngine<T> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<T> SearchEngine<T> {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            index: InvertedIndex::new(),
            tree: BkTree::new(),
            config,
            term_insertions: 0,
            term_removals: 0,
            stale_terms: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            term_insertions: self.term_insertions,
            term_removals: self.term_removals,
            indexed_terms: self.index.term_count(),
            tree_terms: self.tree.len(),
            stale_terms: self.stale_terms,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Mutation operations.
impl<T> SearchEngine<T>
where
    T: Searchable + Clone + Eq + Hash,
{
    /// Registers every term of `item`.
    pub fn add_to_index(&mut self, item: &T) {
        for term in item.search_terms() {
            self.insert_term(item, Term::from(term));
        }
    }

    /// Unregisters every current term of `item`. Unknown items are ignored.
    pub fn remove_from_index(&mut self, item: &T) {
        for term in item.search_terms() {
            self.remove_term(item, Term::from(term));
        }
    }

    /// Applies the difference between `old_terms` and the item's current terms.
    ///
    /// Terms present in both are left in place, keeping their position in
    /// their buckets.
    pub fn modify_in_index<S: AsRef<str>>(&mut self, item: &T, old_terms: &[S]) {
        let mut new_terms: Vec<Term> = item.search_terms().into_iter().map(Term::from).collect();

        for old in old_terms {
            let old = Term::from(old.as_ref());
            match new_terms.iter().position(|term| *term == old) {
                Some(pos) => {
                    new_terms.remove(pos);
                }
                None => self.remove_term(item, old),
            }
        }

        debug!(added = new_terms.len(), "modify_in_index");
        for term in new_terms {
            self.insert_term(item, term);
        }
    }

    fn insert_term(&mut self, item: &T, term: Term) {
        trace!(term = %term, "index term");
        self.index.add(item.clone(), term.clone());
        self.tree.insert(term);
        self.term_insertions += 1;
    }

    fn remove_term(&mut self, item: &T, term: Term) {
        match self.index.remove(item, &term) {
            Removal::NotFound => {
                trace!(term = %term, "term not registered for item");
            }
            Removal::Removed => {
                trace!(term = %term, "unindex term");
                self.term_removals += 1;
            }
            Removal::BucketDropped => {
                trace!(term = %term, "unindex term, bucket dropped");
                self.term_removals += 1;
                self.stale_terms += 1;
            }
        }
    }
}

/// Search operations.
impl<T> SearchEngine<T>
where
    T: Searchable + Clone + Eq + Hash,
{
    /// Items registered under exactly `query` (case-insensitive).
    pub fn search_exact(&self, query: &str) -> Vec<T> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.index.lookup(query).to_vec()
    }

    /// Items with a term within `max_distance` edits of `query`.
    ///
    /// Exact hits come first, then fuzzy hits in tree traversal order. Each
    /// item appears once.
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<T> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let query = Term::from(query);

        let mut seen = HashSet::new();
        let mut results = Vec::new();
        extend_unique(&mut results, &mut seen, self.index.lookup(&query));

        let matches = self.tree.search_within(&query, max_distance);
        for term in &matches {
            extend_unique(&mut results, &mut seen, self.index.lookup(term));
        }

        debug!(
            query = %query,
            max_distance,
            matched_terms = matches.len(),
            hits = results.len(),
            "search"
        );
        results
    }

    /// [`search`](Self::search) with the configured default radius.
    pub fn search_default(&self, query: &str) -> Vec<T> {
        self.search(query, self.config.default_max_distance)
    }

    /// Orders `results` by relevance for `query`, see [`ranking::sort_search_results`].
    pub fn sort_search_results(
        &self,
        results: &[T],
        query: &str,
        ascending: bool,
    ) -> Vec<RankedResult<T>> {
        ranking::sort_search_results(results, query, ascending)
    }
}

/// Maintenance operations.
impl<T> SearchEngine<T> {
    /// Rebuilds the BK-tree if stale terms exceed the threshold.
    pub fn maintenance_compact(&mut self) {
        if self.stale_terms > self.config.rebuild_threshold {
            self.rebuild_tree();
        }
    }

    /// Rebuilds the BK-tree from the terms that still have items.
    pub fn rebuild_tree(&mut self) {
        let before = self.tree.len();
        self.tree = BkTree::from_terms(self.index.terms());
        debug!(
            before,
            after = self.tree.len(),
            stale_terms = self.stale_terms,
            "rebuilt term tree"
        );
        self.stale_terms = 0;
    }
}

fn extend_unique<T: Clone + Eq + Hash>(results: &mut Vec<T>, seen: &mut HashSet<T>, items: &[T]) {
    for item in items {
        if seen.insert(item.clone()) {
            results.push(item.clone());
        }
    }
}
