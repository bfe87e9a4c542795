pub mod catalog;
pub mod config;
pub mod favorites;
pub mod filter;
pub mod session;
pub mod storage;
pub mod view;

#[cfg(feature = "desktop")]
mod commands;

use log::{info, warn};
use std::sync::Arc;

use catalog::Catalog;
use config::AppConfig;
use session::Session;
use storage::LocalStorage;

/// Opens the store under the configured data directory and starts a session
/// over the built-in catalog.
///
/// Never fails: if the data directory cannot be created the session still
/// runs on in-memory favorites and every write is logged as it fails.
pub fn open_session(config: &AppConfig) -> Session {
    if let Err(err) = std::fs::create_dir_all(&config.data_dir) {
        warn!(
            "Failed to create data directory {}: {err}; favorites will not persist",
            config.data_dir.display()
        );
    }

    let storage = Arc::new(LocalStorage::open(config.storage_path()));
    info!("Using storage at {}", storage.path().display());

    Session::new(Catalog::bakebook(), storage)
}

#[cfg(feature = "desktop")]
pub(crate) struct AppState {
    pub(crate) session: Session,
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir();
            let fallback_dir = app_data_dir
                .as_ref()
                .cloned()
                .unwrap_or_else(|_| std::path::PathBuf::from("."));
            let config = AppConfig::from_env(fallback_dir);
            config::init_logging(&config);

            info!("BakeBook starting up...");
            if let Err(err) = &app_data_dir {
                warn!("No app data directory ({err}); falling back to the working directory");
            }

            let session = open_session(&config);
            app.manage(AppState { session });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_app_header,
            commands::get_catalog_view,
            commands::set_query,
            commands::set_category,
            commands::set_difficulty,
            commands::reset_filters,
            commands::select_recipe,
            commands::close_recipe,
            commands::get_selected_recipe,
            commands::toggle_favorite,
            commands::get_favorites,
            commands::open_recipe_image,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
