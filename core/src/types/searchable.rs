use super::Category;
use std::rc::Rc;
use std::sync::Arc;

/// An item that can be registered with a search engine.
///
/// The engine reads [`search_terms`](Searchable::search_terms) as a snapshot
/// at call time and never writes to the item. Identity for deduplication is
/// the implementor's `Eq + Hash`, so handles such as `Rc<T>` with pointer
/// equality and plain value types both work.
pub trait Searchable {
    /// Ordered search terms. Case does not matter; the engine canonicalizes.
    fn search_terms(&self) -> Vec<String>;

    fn display_name(&self) -> &str;

    /// Dotted or slashed path used when sorting by namespace.
    fn namespace(&self) -> &str {
        ""
    }

    fn category(&self) -> Category {
        Category::Other
    }

    /// Relevance of this item for `query`. Higher is more relevant.
    fn relevance_score(&self, _query: &str) -> f64 {
        1.0
    }
}

macro_rules! forward_searchable {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Searchable + ?Sized> Searchable for $ptr {
                fn search_terms(&self) -> Vec<String> {
                    (**self).search_terms()
                }

                fn display_name(&self) -> &str {
                    (**self).display_name()
                }

                fn namespace(&self) -> &str {
                    (**self).namespace()
                }

                fn category(&self) -> Category {
                    (**self).category()
                }

                fn relevance_score(&self, query: &str) -> f64 {
                    (**self).relevance_score(query)
                }
            }
        )*
    };
}

forward_searchable!(&T, Box<T>, Rc<T>, Arc<T>);
