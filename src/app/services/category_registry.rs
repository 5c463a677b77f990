//! Category registry for the competition divisions
//!
//! The registry is a fixed table, not derived from the sheet. Row-range bindings
//! resolve their category here at ingestion time; everywhere else category scoping
//! is plain `category_id` equality against the registry entries.

use crate::app::models::{Category, Level, Sex};
use crate::constants::{CATEGORY_ROW_BINDINGS, RowBinding, category_ids};
use crate::{Error, Result};
use std::ops::RangeInclusive;

/// Registry of competition categories, kept in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Create a registry from an explicit category table
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories of the hybrid competition
    pub fn competition() -> Self {
        Self::new(vec![
            Category::new(
                category_ids::SCALED_FEMALE,
                "SCALED Femenino",
                Sex::Female,
                Level::Scaled,
            ),
            Category::new(
                category_ids::SCALED_MALE,
                "SCALED Masculino",
                Sex::Male,
                Level::Scaled,
            ),
            Category::new(
                category_ids::OPEN_FEMALE,
                "OPEN Femenino",
                Sex::Female,
                Level::Open,
            ),
            Category::new(
                category_ids::OPEN_MALE,
                "OPEN Masculino",
                Sex::Male,
                Level::Open,
            ),
            Category::new(category_ids::RX_MALE, "RX Masculino", Sex::Male, Level::Rx),
        ])
    }

    /// Get a category by id
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Check if a category exists in the registry
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Resolve raw row bindings against the registry
    ///
    /// A binding naming an unknown category is a layout defect, not a data-quality
    /// event, so it is reported as an error.
    pub fn resolve_bindings(&self, raw: &[RowBinding]) -> Result<Vec<CategoryBinding>> {
        raw.iter()
            .map(|&(start_row, end_row, id)| {
                let category = self.get(id).ok_or_else(|| Error::unknown_category(id))?;
                Ok(CategoryBinding::new(start_row, end_row, category.clone()))
            })
            .collect()
    }

    /// Row bindings of the competition sheet
    pub fn competition_bindings(&self) -> Result<Vec<CategoryBinding>> {
        self.resolve_bindings(CATEGORY_ROW_BINDINGS)
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::competition()
    }
}

/// A sheet row range (0-indexed, inclusive) bound to one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBinding {
    pub start_row: usize,
    pub end_row: usize,
    pub category: Category,
}

impl CategoryBinding {
    pub fn new(start_row: usize, end_row: usize, category: Category) -> Self {
        Self {
            start_row,
            end_row,
            category,
        }
    }

    /// Absolute row indices covered by this binding
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.start_row..=self.end_row
    }

    pub fn contains_row(&self, row: usize) -> bool {
        self.rows().contains(&row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competition_registry() {
        let registry = CategoryRegistry::competition();
        assert_eq!(registry.category_count(), 5);

        let rx = registry.get(category_ids::RX_MALE).unwrap();
        assert_eq!(rx.label, "RX Masculino");
        assert_eq!(rx.sex, Sex::Male);
        assert_eq!(rx.level, Level::Rx);

        assert!(registry.contains(category_ids::OPEN_FEMALE));
        assert!(!registry.contains("masters"));
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = CategoryRegistry::competition();
        for category in registry.categories() {
            let matches = registry
                .categories()
                .iter()
                .filter(|c| c.id == category.id)
                .count();
            assert_eq!(matches, 1, "duplicate category id {}", category.id);
        }
    }

    #[test]
    fn test_category_sex_and_level() {
        let registry = CategoryRegistry::competition();
        let scaled = registry.get(category_ids::SCALED_FEMALE).unwrap();
        assert_eq!((scaled.sex, scaled.level), (Sex::Female, Level::Scaled));
        let rx = registry.get(category_ids::RX_MALE).unwrap();
        assert_eq!((rx.sex, rx.level), (Sex::Male, Level::Rx));
    }

    #[test]
    fn test_competition_bindings_resolve() {
        let registry = CategoryRegistry::competition();
        let bindings = registry.competition_bindings().unwrap();
        assert_eq!(bindings.len(), CATEGORY_ROW_BINDINGS.len());
        assert_eq!(bindings[0].category.id, category_ids::SCALED_FEMALE);
        assert_eq!(bindings[0].rows(), 3..=12);
        assert!(bindings[4].contains_row(63));
        assert!(bindings[4].contains_row(74));
        assert!(!bindings[4].contains_row(75));
    }

    #[test]
    fn test_unknown_binding_category_is_error() {
        let registry = CategoryRegistry::competition();
        let result = registry.resolve_bindings(&[(3, 5, "masters")]);
        assert!(matches!(result, Err(Error::UnknownCategory { ref id }) if id == "masters"));
    }
}
