//! A file-backed string key-value store, the desktop stand-in for a
//! browser's `localStorage`.
//!
//! The whole map lives in memory and is rewritten to disk on every
//! `set_item`. A store file that cannot be read or parsed opens as empty.

use anyhow::{Context, Result};
use log::warn;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

pub struct LocalStorage {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl LocalStorage {
    pub fn open(path: PathBuf) -> Self {
        let items = read_items(&path).unwrap_or_else(|err| {
            warn!("Ignoring unreadable storage at {}: {err:#}", path.display());
            BTreeMap::new()
        });

        Self {
            path,
            items: RwLock::new(items),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Updates the in-memory map, then writes the file. The in-memory value is
    /// kept even when the write fails.
    pub fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut guard = self.items.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key.to_string(), value);
        self.persist(&guard)
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        let mut guard = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if guard.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&guard)
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let serialized = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write storage to {}", self.path.display()))
    }
}

fn read_items(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read storage from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Malformed storage file {}", path.display()))
}
