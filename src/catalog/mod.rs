//! The static recipe catalog and the facet lists derived from it.

mod data;
mod recipe;

use std::sync::LazyLock;

pub use recipe::Recipe;

/// Facet sentinel that disables a category or difficulty filter.
pub const ALL: &str = "All";

static BAKEBOOK: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(data::RECIPES));

#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: &'static [Recipe],
    categories: Vec<&'static str>,
    difficulties: Vec<&'static str>,
}

impl Catalog {
    /// Builds a catalog over `recipes`, deriving both facet lists once.
    pub fn new(recipes: &'static [Recipe]) -> Self {
        Self {
            recipes,
            categories: distinct(recipes.iter().map(|r| r.category)),
            difficulties: distinct(recipes.iter().map(|r| r.difficulty)),
        }
    }

    /// The built-in BakeBook catalog, initialized on first use.
    pub fn bakebook() -> &'static Catalog {
        &BAKEBOOK
    }

    pub fn recipes(&self) -> &'static [Recipe] {
        self.recipes
    }

    pub fn find(&self, id: u32) -> Option<&'static Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find(id).is_some()
    }

    /// `"All"` followed by each category in first-seen catalog order.
    pub fn distinct_categories(&self) -> &[&'static str] {
        &self.categories
    }

    /// `"All"` followed by each difficulty in first-seen catalog order.
    pub fn distinct_difficulties(&self) -> &[&'static str] {
        &self.difficulties
    }
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut out = vec![ALL];
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
