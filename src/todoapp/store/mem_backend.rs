use super::{StorageBackend, StoreFile};
use crate::error::{Result, TodoError};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory storage backend for testing.
///
/// Uses a `Mutex` rather than `RefCell` because the background writer reads
/// and writes from its own thread.
#[derive(Default)]
pub struct MemBackend {
    files: Mutex<HashMap<StoreFile, String>>,
    writes: Mutex<HashMap<StoreFile, usize>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Seeds raw file content, bypassing the write counter.
    pub fn put_raw(&self, file: StoreFile, content: &str) {
        lock(&self.files).insert(file, content.to_string());
    }

    /// Current raw content of a file.
    pub fn raw(&self, file: StoreFile) -> Option<String> {
        lock(&self.files).get(&file).cloned()
    }

    /// Number of successful writes to a file.
    pub fn write_count(&self, file: StoreFile) -> usize {
        lock(&self.writes).get(&file).copied().unwrap_or(0)
    }
}

// A poisoned lock only means a test thread panicked mid-write; the map itself
// is still usable.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StorageBackend for MemBackend {
    fn read(&self, file: StoreFile) -> Result<Option<String>> {
        Ok(self.raw(file))
    }

    fn write(&self, file: StoreFile, content: &str) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        lock(&self.files).insert(file, content.to_string());
        *lock(&self.writes).entry(file).or_insert(0) += 1;
        Ok(())
    }

    fn location(&self, file: StoreFile) -> PathBuf {
        PathBuf::from(format!("memory://{}", file.file_name()))
    }
}
