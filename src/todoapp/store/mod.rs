//! # Storage Layer
//!
//! Durable round-trip of whole snapshots to single files. There are two stores,
//! each concretely typed:
//!
//! - [`todos::TodoStore`]: the todo list, in `todos.json`
//! - [`settings::SettingsStore`]: the settings map, in `settings.json`
//!
//! They share nothing but the [`load_snapshot`] / [`save_snapshot`] helpers
//! and a [`StorageBackend`] doing the raw I/O.
//!
//! ## Failure Contract
//!
//! Storage never fails towards its caller:
//! - `load` returns the empty value when the file is missing, unreadable or
//!   malformed. The cause is logged, not returned.
//! - `save` logs any encoding or I/O failure and otherwise does nothing.
//!
//! Callers therefore cannot tell "never existed" from "failed to parse".
//!
//! ## Backends
//!
//! - [`fs_backend::FsBackend`]: production, atomic writes under a data directory
//! - [`mem_backend::MemBackend`]: in-memory for tests, counts writes and can
//!   simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.todo-app/
//! ├── todos.json      # pretty-printed array of todos, insertion order
//! └── settings.json   # pretty-printed object of string pairs
//! ```

use crate::config::{SETTINGS_FILENAME, TODOS_FILENAME};
use crate::error::Result;
use log::{debug, error, warn};
use std::path::PathBuf;

pub mod codec;
pub mod fs_backend;
pub mod mem_backend;
pub mod settings;
pub mod todos;

/// The files a backend knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreFile {
    Todos,
    Settings,
}

impl StoreFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreFile::Todos => TODOS_FILENAME,
            StoreFile::Settings => SETTINGS_FILENAME,
        }
    }
}

impl std::fmt::Display for StoreFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Raw storage I/O.
///
/// Shared between the state owner and its background writer, hence
/// `Send + Sync`.
pub trait StorageBackend: Send + Sync + 'static {
    /// Read the whole file. `Ok(None)` if it does not exist.
    fn read(&self, file: StoreFile) -> Result<Option<String>>;

    /// Replace the whole file. Creates the containing directory if needed.
    fn write(&self, file: StoreFile, content: &str) -> Result<()>;

    /// Where the file lives. Logged when a store is opened.
    fn location(&self, file: StoreFile) -> PathBuf;
}

/// Reads and decodes a snapshot, substituting `T::default()` on any failure.
pub(crate) fn load_snapshot<B, T>(backend: &B, file: StoreFile, decode: fn(&str) -> Result<T>) -> T
where
    B: StorageBackend + ?Sized,
    T: Default,
{
    let content = match backend.read(file) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!("{} not found, starting empty", file);
            return T::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {}", file, e);
            return T::default();
        }
    };

    match decode(&content) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("Failed to load {}, starting empty: {}", file, e);
            T::default()
        }
    }
}

/// Encodes and writes a snapshot. Failures are logged and swallowed.
pub(crate) fn save_snapshot<B, T>(
    backend: &B,
    file: StoreFile,
    snapshot: &T,
    encode: fn(&T) -> Result<String>,
) where
    B: StorageBackend + ?Sized,
    T: ?Sized,
{
    let written = encode(snapshot).and_then(|content| backend.write(file, &content));
    match written {
        Ok(()) => debug!("Saved {}", file),
        Err(e) => error!("Failed to save {}: {}", file, e),
    }
}
