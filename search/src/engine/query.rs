use super::{SearchEngine, extend_unique};
use crate::ranking::sort_results;
use crate::results::RankedResult;
use std::collections::HashSet;
use std::hash::Hash;
use termdex_core::{SearchMode, SearchSettings, Searchable, SortingOption};
use tracing::debug;

/// Settings-driven queries.
impl<T> SearchEngine<T>
where
    T: Searchable + Clone + Eq + Hash,
{
    /// Runs `query` the way a search box configured with `settings` would.
    ///
    /// Candidates are chosen by [`SearchMode`], widened to prefix matches
    /// unless `whole_word` is set, filtered by category, and ordered by
    /// [`SortingOption`]: relevance puts the highest score first, the other
    /// options sort ascending.
    pub fn query(&self, query: &str, settings: &SearchSettings) -> Vec<RankedResult<T>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let mut candidates = match settings.mode {
            SearchMode::ExactMatch => self.search_exact(query),
            SearchMode::Fuzzy => self.search(query, settings.max_edit_distance),
            SearchMode::Default => {
                let exact = self.search_exact(query);
                if exact.is_empty() {
                    self.search(query, settings.max_edit_distance)
                } else {
                    exact
                }
            }
        };

        if !settings.whole_word {
            self.extend_with_prefix_matches(query, &mut candidates);
        }

        candidates.retain(|item| settings.category_filter.contains(item.category()));

        debug!(
            mode = %settings.mode,
            sorting = %settings.sorting,
            candidates = candidates.len(),
            "query"
        );

        let ascending = settings.sorting != SortingOption::Relevance;
        sort_results(&candidates, query, settings.sorting, ascending)
    }

    fn extend_with_prefix_matches(&self, query: &str, candidates: &mut Vec<T>) {
        let mut seen: HashSet<T> = candidates.iter().cloned().collect();
        for (_, items) in self.index.lookup_prefix(query) {
            extend_unique(candidates, &mut seen, items);
        }
    }
}
