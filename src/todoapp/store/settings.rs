use super::codec::{decode_settings, encode_settings};
use super::{load_snapshot, save_snapshot, StorageBackend, StoreFile};
use crate::model::SettingsMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Persistence for the settings map snapshot.
pub struct SettingsStore<B: StorageBackend> {
    backend: Arc<B>,
}

impl<B: StorageBackend> SettingsStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> SettingsMap {
        load_snapshot(self.backend.as_ref(), StoreFile::Settings, decode_settings)
    }

    pub fn save(&self, settings: &SettingsMap) {
        save_snapshot(
            self.backend.as_ref(),
            StoreFile::Settings,
            settings,
            encode_settings,
        )
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(StoreFile::Settings)
    }
}
