use anyhow::{bail, Result};
use serde::Serialize;

use crate::catalog::{Catalog, Recipe, ALL};

/// Transient search inputs. Never persisted; reset on restart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub query: String,
    pub category: String,
    pub difficulty: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL.into(),
            difficulty: ALL.into(),
        }
    }
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Rejects values outside the catalog's category list and leaves the
    /// current selection untouched.
    pub fn set_category(&mut self, catalog: &Catalog, category: &str) -> Result<()> {
        if !catalog.distinct_categories().iter().any(|c| *c == category) {
            bail!("unknown category '{category}'");
        }
        self.category = category.to_string();
        Ok(())
    }

    pub fn set_difficulty(&mut self, catalog: &Catalog, difficulty: &str) -> Result<()> {
        if !catalog.distinct_difficulties().iter().any(|d| *d == difficulty) {
            bail!("unknown difficulty '{difficulty}'");
        }
        self.difficulty = difficulty.to_string();
        Ok(())
    }

    pub fn apply(&self, catalog: &Catalog) -> Vec<&'static Recipe> {
        visible_recipes(catalog, &self.query, &self.category, &self.difficulty)
    }
}

/// Recipes matching all three predicates, in catalog order.
///
/// The query matches case-insensitively against the title or any ingredient;
/// an empty query matches everything. `"All"` disables the category or
/// difficulty predicate.
pub fn visible_recipes(
    catalog: &Catalog,
    query: &str,
    category: &str,
    difficulty: &str,
) -> Vec<&'static Recipe> {
    let needle = query.to_lowercase();

    catalog
        .recipes()
        .iter()
        .filter(|recipe| {
            let matches_query = needle.is_empty() || recipe.mentions(&needle);
            let matches_category = category == ALL || recipe.category == category;
            let matches_difficulty = difficulty == ALL || recipe.difficulty == difficulty;
            matches_query && matches_category && matches_difficulty
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(recipes: &[&Recipe]) -> Vec<&'static str> {
        recipes.iter().map(|r| r.title).collect()
    }

    #[test]
    fn query_matches_ingredients() {
        let visible = visible_recipes(Catalog::bakebook(), "chocolate", ALL, ALL);
        assert_eq!(titles(&visible), vec!["Classic Chocolate Chip Cookies"]);

        // "yeast" only appears in the bread's ingredient list
        let visible = visible_recipes(Catalog::bakebook(), "yeast", ALL, ALL);
        assert_eq!(titles(&visible), vec!["No-Knead Rustic Bread"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let visible = visible_recipes(Catalog::bakebook(), "LEMON", ALL, ALL);
        assert_eq!(titles(&visible), vec!["Lemon Drizzle Cake"]);
    }

    #[test]
    fn all_facets_are_identity() {
        let catalog = Catalog::bakebook();
        for query in ["", "flour", "sugar", "zzz"] {
            let query_only: Vec<_> = catalog
                .recipes()
                .iter()
                .filter(|r| query.is_empty() || r.mentions(&query.to_lowercase()))
                .collect();
            assert_eq!(visible_recipes(catalog, query, ALL, ALL), query_only);
        }
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let catalog = Catalog::bakebook();
        assert!(visible_recipes(catalog, "yeast", "Cakes", ALL).is_empty());
        assert!(visible_recipes(catalog, "", "Bread", "Easy").is_empty());
        assert!(visible_recipes(catalog, "nothing like this", "Cookies", ALL).is_empty());

        let visible = visible_recipes(catalog, "sugar", ALL, "Easy");
        assert_eq!(
            titles(&visible),
            vec!["Classic Chocolate Chip Cookies", "Lemon Drizzle Cake"]
        );
    }

    #[test]
    fn results_are_subsets_and_idempotent() {
        let catalog = Catalog::bakebook();
        for query in ["", "a", "EGG", "salt", "°c"] {
            for category in catalog.distinct_categories() {
                for difficulty in catalog.distinct_difficulties() {
                    let first = visible_recipes(catalog, query, category, difficulty);
                    let second = visible_recipes(catalog, query, category, difficulty);
                    assert_eq!(first, second);
                    assert!(first.iter().all(|r| catalog.contains(r.id)));
                }
            }
        }
    }

    #[test]
    fn unknown_facet_values_are_rejected() {
        let catalog = Catalog::bakebook();
        let mut state = FilterState::default();
        state.set_category(catalog, "Bread").unwrap();

        assert!(state.set_category(catalog, "Pies").is_err());
        assert!(state.set_difficulty(catalog, "easy").is_err());
        assert_eq!(state.category, "Bread");
        assert_eq!(state.difficulty, ALL);
        assert_eq!(titles(&state.apply(catalog)), vec!["No-Knead Rustic Bread"]);
    }
}
