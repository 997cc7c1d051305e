//! Burkhard-Keller tree over canonical terms.

use crate::distance::distance;
use std::collections::BTreeMap;
use termdex_core::Term;

const ROOT: usize = 0;

/// A BK-tree for bounded-radius edit-distance queries.
///
/// Nodes live in an arena; each node maps an edit distance to the child whose
/// term is exactly that far from the node's own term. Every distinct
/// canonical term occupies at most one node.
#[derive(Debug, Clone, Default)]
pub struct BkTree {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone)]
struct Node {
    term: Term,
    children: BTreeMap<usize, usize>,
}

impl Node {
    fn new(term: Term) -> Self {
        Self {
            term,
            children: BTreeMap::new(),
        }
    }
}

impl BkTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree by inserting `terms` in order.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        let mut tree = Self::new();
        for term in terms {
            tree.insert(term);
        }
        tree
    }

    /// Number of distinct terms in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over all terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.nodes.iter().map(|node| &node.term)
    }

    /// Inserts `term`, returning `false` if it was already present.
    pub fn insert(&mut self, term: impl Into<Term>) -> bool {
        let term = term.into();
        if self.nodes.is_empty() {
            self.nodes.push(Node::new(term));
            return true;
        }

        let mut current = ROOT;
        loop {
            let d = distance(&term, &self.nodes[current].term);
            if d == 0 {
                return false;
            }
            match self.nodes[current].children.get(&d) {
                Some(&child) => current = child,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(Node::new(term));
                    self.nodes[current].children.insert(d, id);
                    return true;
                }
            }
        }
    }

    pub fn contains(&self, term: &str) -> bool {
        let term = Term::from(term);
        if self.nodes.is_empty() {
            return false;
        }

        let mut current = ROOT;
        loop {
            let d = distance(&term, &self.nodes[current].term);
            if d == 0 {
                return true;
            }
            match self.nodes[current].children.get(&d) {
                Some(&child) => current = child,
                None => return false,
            }
        }
    }

    /// Returns every term within `max_distance` edits of `query`.
    ///
    /// A child keyed `k` under a node at distance `d` from the query can only
    /// hold matches if `|d - k| <= max_distance`, so other subtrees are skipped.
    pub fn search_within(&self, query: &str, max_distance: usize) -> Vec<Term> {
        let query = Term::from(query);
        let mut matches = Vec::new();
        if self.nodes.is_empty() {
            return matches;
        }

        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            let d = distance(&query, &node.term);
            if d <= max_distance {
                matches.push(node.term.clone());
            }

            let low = d.saturating_sub(max_distance);
            let high = d.saturating_add(max_distance);
            stack.extend(node.children.range(low..=high).map(|(_, &child)| child));
        }

        matches
    }
}
