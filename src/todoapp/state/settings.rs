use crate::error::Result;
use crate::model::SettingsMap;
use crate::persist::Persister;
use crate::store::settings::SettingsStore;
use crate::store::StorageBackend;

/// In-memory string settings, persisted as a whole after every `set`.
pub struct Settings {
    values: SettingsMap,
    persister: Persister<SettingsMap>,
}

impl Settings {
    pub fn open<B: StorageBackend>(store: SettingsStore<B>) -> Result<Self> {
        let values = store.load();
        let persister = Persister::spawn("settings", move |snapshot: SettingsMap| {
            store.save(&snapshot)
        })?;
        Ok(Self { values, persister })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
        self.persister.submit(self.values.clone());
    }

    /// A copy of every stored pair, sorted by key.
    pub fn snapshot(&self) -> SettingsMap {
        self.values.clone()
    }

    pub fn flush(&self) {
        self.persister.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::StoreFile;
    use std::sync::Arc;

    #[test]
    fn get_missing_is_none() {
        let settings = Settings::open(SettingsStore::new(Arc::new(MemBackend::new()))).unwrap();
        assert_eq!(settings.get("theme"), None);
    }

    #[test]
    fn set_overwrites_and_persists() {
        let backend = Arc::new(MemBackend::new());
        let mut settings = Settings::open(SettingsStore::new(Arc::clone(&backend))).unwrap();
        settings.set("theme", "light");
        settings.set("theme", "dark");
        settings.flush();

        assert_eq!(settings.get("theme"), Some("dark"));
        assert_eq!(backend.write_count(StoreFile::Settings), 2);
        let stored = SettingsStore::new(backend).load();
        assert_eq!(stored.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn loads_existing_values() {
        let backend = Arc::new(MemBackend::new());
        backend.put_raw(StoreFile::Settings, r#"{"hideCompleted": "true"}"#);
        let settings = Settings::open(SettingsStore::new(backend)).unwrap();
        assert_eq!(settings.get("hideCompleted"), Some("true"));
        assert_eq!(settings.snapshot().len(), 1);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let backend = Arc::new(MemBackend::new());
        backend.put_raw(StoreFile::Settings, "{{{{");
        let settings = Settings::open(SettingsStore::new(backend)).unwrap();
        assert!(settings.snapshot().is_empty());
    }
}
