//! Tauri commands exposing the session to the webview.

use log::warn;
use tauri::{AppHandle, Emitter, State};
use tauri_plugin_opener::OpenerExt;

use crate::{
    favorites::FavoriteSet,
    view::{AppHeader, CatalogView, FavoriteEntry, RecipeDetail},
    AppState,
};

#[tauri::command]
pub fn get_app_header(state: State<'_, AppState>) -> AppHeader {
    state.session.header()
}

#[tauri::command]
pub fn get_catalog_view(state: State<'_, AppState>) -> CatalogView {
    state.session.catalog_view()
}

#[tauri::command]
pub fn set_query(state: State<'_, AppState>, query: String) -> CatalogView {
    state.session.set_query(query)
}

#[tauri::command]
pub fn set_category(state: State<'_, AppState>, category: String) -> Result<CatalogView, String> {
    state
        .session
        .set_category(&category)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_difficulty(
    state: State<'_, AppState>,
    difficulty: String,
) -> Result<CatalogView, String> {
    state
        .session
        .set_difficulty(&difficulty)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn reset_filters(state: State<'_, AppState>) -> CatalogView {
    state.session.reset_filters()
}

/// `None` when the id is not in the catalog; the modal stays closed.
#[tauri::command]
pub fn select_recipe(state: State<'_, AppState>, recipe_id: u32) -> Option<RecipeDetail> {
    state.session.select_recipe(recipe_id)
}

#[tauri::command]
pub fn close_recipe(state: State<'_, AppState>) {
    state.session.close_recipe();
}

#[tauri::command]
pub fn get_selected_recipe(state: State<'_, AppState>) -> Option<RecipeDetail> {
    state.session.selected_recipe()
}

/// The toggle is already persisted when the event goes out, so a failed emit
/// is only logged.
#[tauri::command]
pub fn toggle_favorite(
    state: State<'_, AppState>,
    app_handle: AppHandle,
    recipe_id: u32,
) -> FavoriteSet {
    let favorites = state.session.toggle_favorite(recipe_id);

    if let Err(err) = app_handle.emit("favorites-changed", &favorites) {
        warn!("Failed to emit favorites-changed: {err}");
    }

    favorites
}

#[tauri::command]
pub fn get_favorites(state: State<'_, AppState>) -> Vec<FavoriteEntry> {
    state.session.favorites()
}

/// Opens the recipe's photo in the system browser.
#[tauri::command]
pub fn open_recipe_image(
    state: State<'_, AppState>,
    app_handle: AppHandle,
    recipe_id: u32,
) -> Result<(), String> {
    let image = state
        .session
        .catalog()
        .find(recipe_id)
        .and_then(|recipe| recipe.image)
        .ok_or_else(|| format!("recipe {recipe_id} has no image"))?;

    app_handle
        .opener()
        .open_url(image, None::<&str>)
        .map_err(|e| e.to_string())
}
