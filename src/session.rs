use anyhow::Result;
use log::debug;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::{
    catalog::{Catalog, Recipe},
    favorites::{FavoriteSet, FavoritesStore},
    filter::FilterState,
    storage::LocalStorage,
    view::{AppHeader, CatalogView, FavoriteEntry, RecipeCard, RecipeDetail, EMPTY_MESSAGE},
};

/// Everything one running BakeBook window knows: the catalog, the transient
/// filter and selection, and the persisted favorites.
pub struct Session {
    catalog: &'static Catalog,
    filter: RwLock<FilterState>,
    selected: RwLock<Option<u32>>,
    favorites: FavoritesStore,
}

impl Session {
    pub fn new(catalog: &'static Catalog, storage: Arc<LocalStorage>) -> Self {
        Self {
            catalog,
            filter: RwLock::new(FilterState::default()),
            selected: RwLock::new(None),
            favorites: FavoritesStore::open(storage),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn header(&self) -> AppHeader {
        AppHeader::default()
    }

    pub fn filter(&self) -> FilterState {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn visible_recipes(&self) -> Vec<&'static Recipe> {
        self.filter().apply(self.catalog)
    }

    pub fn catalog_view(&self) -> CatalogView {
        let filter = self.filter();
        let favorites = self.favorites.snapshot();
        let recipes: Vec<RecipeCard> = filter
            .apply(self.catalog)
            .into_iter()
            .map(|recipe| RecipeCard::new(recipe, favorites.contains(recipe.id)))
            .collect();

        CatalogView {
            empty_message: recipes.is_empty().then_some(EMPTY_MESSAGE),
            filter,
            categories: self.catalog.distinct_categories().to_vec(),
            difficulties: self.catalog.distinct_difficulties().to_vec(),
            recipes,
        }
    }

    pub fn set_query(&self, query: String) -> CatalogView {
        debug!("Query changed to {query:?}");
        self.write_filter().set_query(query);
        self.catalog_view()
    }

    pub fn set_category(&self, category: &str) -> Result<CatalogView> {
        self.write_filter().set_category(self.catalog, category)?;
        debug!("Category changed to {category}");
        Ok(self.catalog_view())
    }

    pub fn set_difficulty(&self, difficulty: &str) -> Result<CatalogView> {
        self.write_filter().set_difficulty(self.catalog, difficulty)?;
        debug!("Difficulty changed to {difficulty}");
        Ok(self.catalog_view())
    }

    pub fn reset_filters(&self) -> CatalogView {
        *self.write_filter() = FilterState::default();
        self.catalog_view()
    }

    /// Opens the detail view for `id`. Unknown ids leave the current
    /// selection as it was and return `None`.
    pub fn select_recipe(&self, id: u32) -> Option<RecipeDetail> {
        let recipe = self.catalog.find(id)?;
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = Some(id);
        Some(RecipeDetail::new(recipe, self.favorites.contains(id)))
    }

    pub fn close_recipe(&self) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn selected_id(&self) -> Option<u32> {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn selected_recipe(&self) -> Option<RecipeDetail> {
        let recipe = self.catalog.find(self.selected_id()?)?;
        Some(RecipeDetail::new(recipe, self.favorites.contains(recipe.id)))
    }

    pub fn toggle_favorite(&self, id: u32) -> FavoriteSet {
        self.favorites.toggle(id)
    }

    pub fn favorite_set(&self) -> FavoriteSet {
        self.favorites.snapshot()
    }

    /// Favorites in the order they were added, skipping ids the catalog does
    /// not know.
    pub fn favorites(&self) -> Vec<FavoriteEntry> {
        self.favorites
            .snapshot()
            .resolve(self.catalog)
            .into_iter()
            .map(|recipe| FavoriteEntry {
                id: recipe.id,
                title: recipe.title,
            })
            .collect()
    }

    fn write_filter(&self) -> RwLockWriteGuard<'_, FilterState> {
        self.filter.write().unwrap_or_else(PoisonError::into_inner)
    }
}
