//! termdex typo-tolerant term search.
//!
//! # Design
//!
//! - An inverted index maps each canonical (lower-cased) term to the items
//!   declaring it; it answers exact queries directly.
//! - A BK-tree holds every term ever indexed and answers "which terms are
//!   within N edits of the query", pruning subtrees with the triangle
//!   inequality. Fuzzy search resolves those terms through the index.
//! - Removing items touches only the index, so the tree can hold stale terms.
//!   They resolve to empty lookups and are dropped when
//!   `maintenance_compact()` rebuilds the tree past a threshold.
//! - Ranking orders results by each item's relevance score and reports the
//!   item's term nearest the query for highlighting.
//!
//! The engine is synchronous and unsynchronized: one owner issues all calls.

mod bk_tree;
mod config;
mod distance;
mod engine;
mod index;
mod ranking;
mod results;

pub use bk_tree::BkTree;
pub use config::{DEFAULT_MAX_DISTANCE, SearchConfig};
pub use distance::distance;
pub use engine::{IndexStats, SearchEngine};
pub use index::{InvertedIndex, Removal};
pub use ranking::{closest_match, sort_results, sort_search_results};
pub use results::RankedResult;
