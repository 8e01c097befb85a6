use super::codec::{decode_todos, encode_todos};
use super::{load_snapshot, save_snapshot, StorageBackend, StoreFile};
use crate::model::Todo;
use std::path::PathBuf;
use std::sync::Arc;

/// Persistence for the todo list snapshot.
pub struct TodoStore<B: StorageBackend> {
    backend: Arc<B>,
}

impl<B: StorageBackend> TodoStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Stored todos in insertion order. Empty if absent or unreadable.
    pub fn load(&self) -> Vec<Todo> {
        load_snapshot(self.backend.as_ref(), StoreFile::Todos, decode_todos)
    }

    /// Overwrites the stored list. Failures are logged, not returned.
    pub fn save(&self, todos: &[Todo]) {
        save_snapshot(self.backend.as_ref(), StoreFile::Todos, todos, encode_todos)
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(StoreFile::Todos)
    }
}
