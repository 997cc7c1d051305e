use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Coarse kind of a searchable item, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// An invocable UI command.
    Command,
    /// A configuration entry.
    Setting,
    /// A domain object.
    Object,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Command,
        Category::Setting,
        Category::Object,
        Category::Other,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Command => write!(f, "command"),
            Category::Setting => write!(f, "setting"),
            Category::Object => write!(f, "object"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// A set of [`Category`] flags.
///
/// Serialized as a list of category names, e.g. `["command", "setting"]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryFilter(u8);

impl CategoryFilter {
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Category::ALL.len() {
            bits |= Category::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn only(category: Category) -> Self {
        Self(category.bit())
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn remove(&mut self, category: Category) {
        self.0 &= !category.bit();
    }

    /// Iterates over the contained categories in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for CategoryFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Category> for CategoryFilter {
    type Output = Self;

    fn bitor(self, rhs: Category) -> Self {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign<Category> for CategoryFilter {
    fn bitor_assign(&mut self, rhs: Category) {
        self.insert(rhs);
    }
}

impl FromIterator<Category> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut filter = Self::none();
        for category in iter {
            filter.insert(category);
        }
        filter
    }
}

impl From<Vec<Category>> for CategoryFilter {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategoryFilter> for Vec<Category> {
    fn from(filter: CategoryFilter) -> Self {
        filter.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_contains_everything() {
        let filter = CategoryFilter::default();
        for category in Category::ALL {
            assert!(filter.contains(category));
        }
    }

    #[test]
    fn test_only_and_bitor() {
        let filter = CategoryFilter::only(Category::Command) | Category::Setting;

        assert!(filter.contains(Category::Command));
        assert!(filter.contains(Category::Setting));
        assert!(!filter.contains(Category::Object));
        assert!(!filter.contains(Category::Other));
    }

    #[test]
    fn test_insert_remove() {
        let mut filter = CategoryFilter::none();
        assert!(filter.is_empty());

        filter.insert(Category::Object);
        assert!(filter.contains(Category::Object));

        filter.remove(Category::Object);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_iter_in_declaration_order() {
        let filter: CategoryFilter = [Category::Other, Category::Command].into_iter().collect();
        let categories: Vec<Category> = filter.iter().collect();
        assert_eq!(categories, vec![Category::Command, Category::Other]);
    }

    #[test]
    fn test_debug_lists_categories() {
        let filter = CategoryFilter::only(Category::Setting);
        assert_eq!(format!("{filter:?}"), "{Setting}");
    }
}
