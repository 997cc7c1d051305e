pub(crate) mod category;
pub use category::{Category, CategoryFilter};

pub(crate) mod config;
pub use config::{MAX_EDIT_DISTANCE_LIMIT, SearchMode, SearchSettings, SortingOption};

pub(crate) mod searchable;
pub use searchable::Searchable;

pub(crate) mod term;
pub use term::Term;
