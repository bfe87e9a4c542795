//! Favorite recipes: an in-memory id set mirrored to the `favorites` storage
//! key on every change.
//!
//! The in-memory set is authoritative for the running session. Storage is
//! best effort: unreadable values load as an empty set and failed writes are
//! logged and otherwise ignored.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

use crate::{
    catalog::{Catalog, Recipe},
    storage::LocalStorage,
};

pub const FAVORITES_KEY: &str = "favorites";

/// Recipe ids in the order they were favorited. Each id appears at most once.
///
/// Equality is by membership; insertion order only shows through `ids` and
/// `resolve`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<u32>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Removes `id` if present, otherwise appends it.
    pub fn toggled(&self, id: u32) -> Self {
        let mut ids = self.0.clone();
        match ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id),
        }
        Self(ids)
    }

    /// Favorited recipes in insertion order. Ids missing from the catalog
    /// are skipped.
    pub fn resolve(&self, catalog: &Catalog) -> Vec<&'static Recipe> {
        self.0.iter().filter_map(|&id| catalog.find(id)).collect()
    }

    /// Parses a stored value such as `[1,3]`. Anything that is not a JSON
    /// array of ids yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_json(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.0.iter().all(|&id| other.contains(id))
    }
}

impl Eq for FavoriteSet {}

impl FromIterator<u32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut ids = Vec::new();
        for id in iter {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self(ids)
    }
}

impl<'de> Deserialize<'de> for FavoriteSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Vec::<u32>::deserialize(deserializer)?;
        Ok(ids.into_iter().collect())
    }
}

/// Reads the favorites key. Absent or malformed values give an empty set.
pub fn load_favorites(storage: &LocalStorage) -> FavoriteSet {
    let Some(raw) = storage.get_item(FAVORITES_KEY) else {
        return FavoriteSet::new();
    };

    FavoriteSet::parse(&raw).unwrap_or_else(|| {
        warn!("Discarding malformed favorites value {raw:?}");
        FavoriteSet::new()
    })
}

/// Toggles `id` and writes the new set through to storage before returning.
/// A failed write is logged; the returned set is still the new one.
pub fn toggle_favorite(storage: &LocalStorage, favorites: &FavoriteSet, id: u32) -> FavoriteSet {
    let next = favorites.toggled(id);
    persist(storage, &next);
    next
}

fn persist(storage: &LocalStorage, favorites: &FavoriteSet) {
    if let Err(err) = storage.set_item(FAVORITES_KEY, favorites.to_json()) {
        warn!("Failed to persist favorites: {err:#}");
    }
}

/// Session-wide favorites backed by [`LocalStorage`].
pub struct FavoritesStore {
    storage: Arc<LocalStorage>,
    data: RwLock<FavoriteSet>,
}

impl FavoritesStore {
    /// Loads the stored set and mirrors it straight back, which normalizes a
    /// malformed value to the set actually in use.
    pub fn open(storage: Arc<LocalStorage>) -> Self {
        let data = load_favorites(&storage);
        persist(&storage, &data);
        debug!("Loaded {} favorite(s)", data.len());

        Self {
            storage,
            data: RwLock::new(data),
        }
    }

    pub fn snapshot(&self) -> FavoriteSet {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    /// The write lock is held across the storage write, so concurrent toggles
    /// never interleave.
    pub fn toggle(&self, id: u32) -> FavoriteSet {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = toggle_favorite(&self.storage, &guard, id);
        guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> Arc<LocalStorage> {
        Arc::new(LocalStorage::open(dir.path().join("local_storage.json")))
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let start: FavoriteSet = [3, 1].into_iter().collect();
        for id in [1, 2, 3, 99] {
            assert_eq!(start.toggled(id).toggled(id), start);
        }
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: FavoriteSet = [3, 1].into_iter().collect();
        let b: FavoriteSet = [1, 3].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a, [1].into_iter().collect::<FavoriteSet>());
        assert_ne!(a, [1, 3, 2].into_iter().collect::<FavoriteSet>());
    }

    #[test]
    fn toggle_sequence_leaves_only_three() {
        let favorites = FavoriteSet::new().toggled(2).toggled(3).toggled(2);
        assert_eq!(favorites.ids(), &[3]);
    }

    #[test]
    fn malformed_values_load_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        for raw in ["not json", "null", "{}", "[1,\"2\"]", "[-1]", "3", ""] {
            storage.set_item(FAVORITES_KEY, raw.into()).unwrap();
            assert!(load_favorites(&storage).is_empty(), "value {raw:?}");
        }
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        assert_eq!(FavoriteSet::parse("[3,1,3,2,1]").unwrap().ids(), &[3, 1, 2]);
    }

    #[test]
    fn stored_value_is_a_json_array() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let favorites = toggle_favorite(&storage, &FavoriteSet::new(), 1);
        let favorites = toggle_favorite(&storage, &favorites, 3);

        assert_eq!(storage.get_item(FAVORITES_KEY).as_deref(), Some("[1,3]"));
        assert_eq!(load_favorites(&storage), favorites);
    }

    #[test]
    fn open_normalizes_corrupt_value() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.set_item(FAVORITES_KEY, "not json".into()).unwrap();

        let store = FavoritesStore::open(storage.clone());
        assert!(store.snapshot().is_empty());
        assert_eq!(storage.get_item(FAVORITES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn resolve_skips_stale_ids_and_keeps_insertion_order() {
        let favorites: FavoriteSet = [3, 42, 1].into_iter().collect();
        let titles: Vec<_> = favorites
            .resolve(Catalog::bakebook())
            .iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Lemon Drizzle Cake", "Classic Chocolate Chip Cookies"]);
    }

    #[test]
    fn write_failure_keeps_session_state() {
        let dir = TempDir::new().unwrap();
        let storage = Arc::new(LocalStorage::open(dir.path().to_path_buf()));
        let store = FavoritesStore::open(storage);

        assert_eq!(store.toggle(2).ids(), &[2]);
        assert!(store.contains(2));
        assert_eq!(store.toggle(2).ids(), &[] as &[u32]);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let dir = TempDir::new().unwrap();
        let store = FavoritesStore::open(storage_in(&dir));
        store.toggle(1);

        std::thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _guard = store.data.write().unwrap();
                panic!("panic while holding the favorites lock");
            });
            assert!(handle.join().is_err());
        });
        assert!(store.data.is_poisoned());

        assert_eq!(store.snapshot().ids(), &[1]);
        assert_eq!(store.toggle(2).ids(), &[1, 2]);
        assert!(store.contains(2));
    }
}
