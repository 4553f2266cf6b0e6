//! `localStorage`-backed settings store.
//!
//! The whole key/value map lives in one JSON blob so a page reload restores
//! every setting from a single read. When storage is unavailable (private
//! mode, sandboxed iframe) the store still works in memory and writes report
//! [`SettingsError::Unavailable`].

use watermark::settings::{MemoryStore, SettingsStore};
use watermark::SettingsError;
use web_sys::Storage;

/// `localStorage` key holding the settings blob.
pub const STORAGE_KEY: &str = "watermark.settings";

pub struct LocalStorageStore {
    storage: Option<Storage>,
    entries: MemoryStore,
}

impl LocalStorageStore {
    /// Open the window's `localStorage` and read the existing blob, if any.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        let entries = storage
            .as_ref()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| match MemoryStore::from_json(&raw) {
                Ok(entries) => Some(entries),
                Err(err) => {
                    tracing::warn!(error = %err, "discarding corrupt settings blob");
                    None
                }
            })
            .unwrap_or_default();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; settings will not persist");
        }
        Self { storage, entries }
    }
}

impl SettingsStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.set(key, value)?;
        let Some(storage) = &self.storage else {
            return Err(SettingsError::Unavailable("localStorage unavailable".into()));
        };
        let blob = self.entries.to_json()?;
        storage
            .set_item(STORAGE_KEY, &blob)
            .map_err(|err| SettingsError::Unavailable(format!("{err:?}")))
    }
}
