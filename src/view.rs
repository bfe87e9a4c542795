//! Serializable view models handed to the webview.

use serde::Serialize;

use crate::{catalog::Recipe, filter::FilterState};

pub const APP_TITLE: &str = "BakeBook";
pub const TAGLINE: &str = "Your cozy corner for baking recipes";
pub const EMPTY_MESSAGE: &str = "No recipes match your search.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppHeader {
    pub title: &'static str,
    pub tagline: &'static str,
}

impl Default for AppHeader {
    fn default() -> Self {
        Self {
            title: APP_TITLE,
            tagline: TAGLINE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    pub id: u32,
    pub title: &'static str,
    pub image: Option<&'static str>,
    pub meta: String,
    pub is_favorite: bool,
    pub favorite_hint: &'static str,
}

impl RecipeCard {
    pub fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            meta: recipe.meta_line(),
            is_favorite,
            favorite_hint: favorite_hint(is_favorite),
        }
    }
}

pub fn favorite_hint(is_favorite: bool) -> &'static str {
    if is_favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub filter: FilterState,
    pub categories: Vec<&'static str>,
    pub difficulties: Vec<&'static str>,
    pub recipes: Vec<RecipeCard>,
    /// Set only when `recipes` is empty.
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: u32,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStep {
    pub number: usize,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: u32,
    pub title: &'static str,
    pub image: Option<&'static str>,
    pub meta: String,
    pub ingredients: &'static [&'static str],
    pub steps: Vec<RecipeStep>,
    pub is_favorite: bool,
}

impl RecipeDetail {
    pub fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            meta: recipe.meta_line(),
            ingredients: recipe.ingredients,
            steps: recipe
                .steps
                .iter()
                .enumerate()
                .map(|(i, &text)| RecipeStep { number: i + 1, text })
                .collect(),
            is_favorite,
        }
    }
}
