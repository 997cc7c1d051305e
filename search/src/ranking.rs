//! Result ordering and closest-term selection.

use crate::distance::distance;
use crate::results::RankedResult;
use std::cmp::Ordering;
use termdex_core::{Searchable, SortingOption};

/// Returns the term in `terms` nearest to `query` by edit distance.
///
/// Comparison is case-insensitive. On ties the earliest term wins. Returns an
/// empty string when `terms` is empty.
pub fn closest_match<S: AsRef<str>>(query: &str, terms: &[S]) -> String {
    nearest_term(query, terms)
        .map(|(term, _)| term.to_owned())
        .unwrap_or_default()
}

fn nearest_term<'a, S: AsRef<str>>(query: &str, terms: &'a [S]) -> Option<(&'a str, usize)> {
    let query = query.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for term in terms {
        let term = term.as_ref();
        let d = distance(&query, &term.to_lowercase());
        // Strict: a later term at the same distance does not replace the first.
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((term, d));
        }
    }

    best
}

struct Scored<T> {
    score: f64,
    distance: usize,
    result: RankedResult<T>,
}

fn score_all<T: Searchable + Clone>(results: &[T], query: &str) -> Vec<Scored<T>> {
    results
        .iter()
        .map(|item| {
            let terms = item.search_terms();
            let (matched_term, distance) = nearest_term(query, &terms)
                .map(|(term, d)| (term.to_owned(), d))
                .unwrap_or((String::new(), usize::MAX));

            Scored {
                score: item.relevance_score(query),
                distance,
                result: RankedResult {
                    matched_term,
                    item: item.clone(),
                },
            }
        })
        .collect()
}

/// Orders `results` by each item's relevance score for `query`.
///
/// Items with equal scores are ordered by the edit distance of their closest
/// term, nearest first, then by their input order.
pub fn sort_search_results<T: Searchable + Clone>(
    results: &[T],
    query: &str,
    ascending: bool,
) -> Vec<RankedResult<T>> {
    if results.is_empty() || query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored = score_all(results, query);
    scored.sort_by(|a, b| {
        directed(a.score.total_cmp(&b.score), ascending).then(a.distance.cmp(&b.distance))
    });

    scored.into_iter().map(|s| s.result).collect()
}

/// Orders `results` by the given [`SortingOption`].
pub fn sort_results<T: Searchable + Clone>(
    results: &[T],
    query: &str,
    sorting: SortingOption,
    ascending: bool,
) -> Vec<RankedResult<T>> {
    if results.is_empty() || query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored = match sorting {
        SortingOption::Relevance => return sort_search_results(results, query, ascending),
        SortingOption::Alphabetical | SortingOption::Namespace => score_all(results, query),
    };

    let key = |s: &Scored<T>| {
        let name = s.result.item.display_name().to_lowercase();
        match sorting {
            SortingOption::Namespace => (s.result.item.namespace().to_lowercase(), name),
            _ => (String::new(), name),
        }
    };
    scored.sort_by(|a, b| directed(key(a).cmp(&key(b)), ascending));

    scored.into_iter().map(|s| s.result).collect()
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ordering
    } else {
        ordering.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termdex_core::Category;

    #[derive(Debug, Clone, PartialEq)]
    struct Doc {
        name: &'static str,
        namespace: &'static str,
        terms: Vec<&'static str>,
        score: f64,
    }

    impl Doc {
        fn new(name: &'static str, terms: &[&'static str], score: f64) -> Self {
            Self {
                name,
                namespace: "",
                terms: terms.to_vec(),
                score,
            }
        }

        fn in_namespace(mut self, namespace: &'static str) -> Self {
            self.namespace = namespace;
            self
        }
    }

    impl Searchable for Doc {
        fn search_terms(&self) -> Vec<String> {
            self.terms.iter().map(|t| t.to_string()).collect()
        }

        fn display_name(&self) -> &str {
            self.name
        }

        fn namespace(&self) -> &str {
            self.namespace
        }

        fn category(&self) -> Category {
            Category::Object
        }

        fn relevance_score(&self, _query: &str) -> f64 {
            self.score
        }
    }

    fn names<T: Searchable>(ranked: &[RankedResult<T>]) -> Vec<&str> {
        ranked.iter().map(|r| r.item.display_name()).collect()
    }

    mod closest {
        use super::*;

        #[test]
        fn test_picks_nearest_term() {
            assert_eq!(closest_match("settngs", &["arcanum", "settings"]), "settings");
        }

        #[test]
        fn test_empty_terms() {
            let terms: [&str; 0] = [];
            assert_eq!(closest_match("anything", &terms), "");
        }

        #[test]
        fn test_first_wins_on_tie() {
            assert_eq!(closest_match("cat", &["cut", "cot", "cat"]), "cat");
            assert_eq!(closest_match("cat", &["cut", "cot"]), "cut");
        }

        #[test]
        fn test_case_insensitive_keeps_original_case() {
            assert_eq!(closest_match("OPEN", &["Close", "OpenFile", "Open"]), "Open");
        }
    }

    mod sort_search_results {
        use super::*;

        #[test]
        fn test_descending_puts_highest_first() {
            let low = Doc::new("low", &["file"], 0.2);
            let high = Doc::new("high", &["file"], 0.8);

            let ranked = sort_search_results(&[low, high], "file", false);

            assert_eq!(names(&ranked), vec!["high", "low"]);
        }

        #[test]
        fn test_ascending_puts_lowest_first() {
            let low = Doc::new("low", &["file"], 0.2);
            let high = Doc::new("high", &["file"], 0.8);

            let ranked = sort_search_results(&[high, low], "file", true);

            assert_eq!(names(&ranked), vec!["low", "high"]);
        }

        #[test]
        fn test_matched_term_is_closest() {
            let doc = Doc::new("doc", &["arcanum", "settings"], 1.0);

            let ranked = sort_search_results(&[doc], "settngs", false);

            assert_eq!(ranked[0].matched_term, "settings");
        }

        #[test]
        fn test_equal_scores_fall_back_to_distance() {
            let far = Doc::new("far", &["fiction"], 1.0);
            let near = Doc::new("near", &["file"], 1.0);

            let ranked = sort_search_results(&[far, near], "fila", false);

            assert_eq!(names(&ranked), vec!["near", "far"]);
        }

        #[test]
        fn test_empty_results_or_blank_query() {
            let doc = Doc::new("doc", &["file"], 1.0);

            assert!(sort_search_results::<Doc>(&[], "file", false).is_empty());
            assert!(sort_search_results(&[doc.clone()], "", false).is_empty());
            assert!(sort_search_results(&[doc], "   ", false).is_empty());
        }
    }

    mod sort_results {
        use super::*;

        #[test]
        fn test_alphabetical_ignores_case() {
            let docs = [
                Doc::new("beta", &["x"], 1.0),
                Doc::new("Alpha", &["x"], 1.0),
                Doc::new("gamma", &["x"], 1.0),
            ];

            let ranked = sort_results(&docs, "x", SortingOption::Alphabetical, true);

            assert_eq!(names(&ranked), vec!["Alpha", "beta", "gamma"]);
        }

        #[test]
        fn test_namespace_then_name() {
            let docs = [
                Doc::new("zoom", &["x"], 1.0).in_namespace("view"),
                Doc::new("open", &["x"], 1.0).in_namespace("file"),
                Doc::new("close", &["x"], 1.0).in_namespace("file"),
            ];

            let ranked = sort_results(&docs, "x", SortingOption::Namespace, true);

            assert_eq!(names(&ranked), vec!["close", "open", "zoom"]);
        }

        #[test]
        fn test_descending_alphabetical() {
            let docs = [Doc::new("a", &["x"], 1.0), Doc::new("b", &["x"], 1.0)];

            let ranked = sort_results(&docs, "x", SortingOption::Alphabetical, false);

            assert_eq!(names(&ranked), vec!["b", "a"]);
        }

        #[test]
        fn test_descending_keeps_ties_in_input_order() {
            let docs = [
                Doc::new("open", &["first"], 1.0).in_namespace("file"),
                Doc::new("open", &["second"], 1.0).in_namespace("file"),
                Doc::new("close", &["third"], 1.0).in_namespace("file"),
            ];

            for sorting in [SortingOption::Alphabetical, SortingOption::Namespace] {
                let ranked = sort_results(&docs, "x", sorting, false);
                let terms: Vec<_> = ranked.iter().map(|r| r.item.terms[0]).collect();

                assert_eq!(terms, vec!["first", "second", "third"]);
            }
        }

        #[test]
        fn test_relevance_delegates() {
            let docs = [Doc::new("low", &["x"], 0.1), Doc::new("high", &["x"], 0.9)];

            let ranked = sort_results(&docs, "x", SortingOption::Relevance, false);

            assert_eq!(names(&ranked), vec!["high", "low"]);
        }
    }
}
