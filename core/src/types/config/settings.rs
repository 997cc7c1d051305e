use crate::error::{Result, SettingsError};
use crate::types::CategoryFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Largest edit distance accepted by [`SearchSettings::validate`].
pub const MAX_EDIT_DISTANCE_LIMIT: usize = 8;

/// User-facing search options, persisted as search.toml.
///
/// These options are consumed by callers of the engine; the engine's own
/// add/remove/search operations never read them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub sorting: SortingOption,
    #[serde(default)]
    pub category_filter: CategoryFilter,
    #[serde(default)]
    pub whole_word: bool,
    #[serde(default = "default_max_edit_distance")]
    pub max_edit_distance: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            sorting: SortingOption::default(),
            category_filter: CategoryFilter::default(),
            whole_word: false,
            max_edit_distance: default_max_edit_distance(),
        }
    }
}

impl SearchSettings {
    /// Returns the settings file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("search.toml")
    }

    /// Loads settings from a TOML file. Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(SettingsError::from)?;
        let settings = toml::from_str(&content).map_err(SettingsError::from)?;
        Ok(settings)
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(SettingsError::from)?;
        std::fs::write(path, content).map_err(SettingsError::from)?;
        Ok(())
    }

    /// Validates settings values and returns list of validation errors.
    /// Returns empty vec if settings are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_edit_distance > MAX_EDIT_DISTANCE_LIMIT {
            errors.push(format!(
                "max_edit_distance must be at most {MAX_EDIT_DISTANCE_LIMIT}"
            ));
        }

        if self.category_filter.is_empty() {
            errors.push("category_filter must include at least one category".to_string());
        }

        errors
    }

    /// Returns validated settings, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            mode: self.mode,
            sorting: self.sorting,
            whole_word: self.whole_word,
            category_filter: if self.category_filter.is_empty() {
                defaults.category_filter
            } else {
                self.category_filter
            },
            max_edit_distance: if self.max_edit_distance > MAX_EDIT_DISTANCE_LIMIT {
                defaults.max_edit_distance
            } else {
                self.max_edit_distance
            },
        }
    }
}

/// How a query string is matched against indexed terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Exact term lookup only.
    ExactMatch,
    /// Every term within the edit-distance radius.
    Fuzzy,
    /// Exact hits when there are any, fuzzy otherwise.
    #[default]
    Default,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::ExactMatch => write!(f, "exact_match"),
            SearchMode::Fuzzy => write!(f, "fuzzy"),
            SearchMode::Default => write!(f, "default"),
        }
    }
}

/// Ordering applied to search results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortingOption {
    #[default]
    Relevance,
    Namespace,
    Alphabetical,
}

impl fmt::Display for SortingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortingOption::Relevance => write!(f, "relevance"),
            SortingOption::Namespace => write!(f, "namespace"),
            SortingOption::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

fn default_max_edit_distance() -> usize {
    2
}
