//! Shared types for termdex.
//!
//! - [`Term`]: the canonical (lower-cased) unit of storage and comparison.
//! - [`Searchable`]: the contract an item implements to be indexed.
//! - [`SearchSettings`]: user-facing search options, persisted as TOML.
//! - [`identifier_terms`]: derives search terms from PascalCase/camelCase names.

pub mod error;
pub mod terms;
pub mod types;

pub use error::{Error, Result, SettingsError};
pub use terms::{identifier_terms, terms_from_names};
pub use types::{
    Category, CategoryFilter, MAX_EDIT_DISTANCE_LIMIT, SearchMode, SearchSettings, Searchable,
    SortingOption, Term,
};
