use crate::error::Result;
use crate::model::{Todo, TodoId};
use crate::persist::Persister;
use crate::store::todos::TodoStore;
use crate::store::StorageBackend;
use log::warn;
use std::collections::HashSet;

/// The authoritative in-memory todo list.
///
/// Every successful mutation updates memory first, then queues the whole list
/// for persistence. Rejected or unmatched mutations leave state alone and
/// queue nothing.
pub struct TodoList {
    items: Vec<Todo>,
    persister: Persister<Vec<Todo>>,
}

impl TodoList {
    /// Loads the stored list and starts the background writer.
    ///
    /// Ids must be unique; if the file repeats one, the first todo wins and
    /// later duplicates are dropped.
    pub fn open<B: StorageBackend>(store: TodoStore<B>) -> Result<Self> {
        let items = dedup_ids(store.load());
        let persister = Persister::spawn("todos", move |snapshot: Vec<Todo>| {
            store.save(&snapshot)
        })?;
        Ok(Self { items, persister })
    }

    /// Appends a new todo. Returns `None` if `text` is blank after trimming.
    pub fn add(&mut self, text: &str) -> Option<Todo> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let todo = Todo::new(text);
        self.items.push(todo.clone());
        self.persist();
        Some(todo)
    }

    /// Flips completion on the matching todo and returns its new state.
    pub fn toggle_completed(&mut self, id: &TodoId) -> Option<Todo> {
        let todo = self.items.iter_mut().find(|t| &t.id == id)?;
        todo.is_completed = !todo.is_completed;
        let updated = todo.clone();
        self.persist();
        Some(updated)
    }

    /// Removes the matching todo and returns it.
    pub fn delete(&mut self, id: &TodoId) -> Option<Todo> {
        let pos = self.items.iter().position(|t| &t.id == id)?;
        let removed = self.items.remove(pos);
        self.persist();
        Some(removed)
    }

    /// Most recent first, optionally without completed todos.
    pub fn list_view(&self, hide_completed: bool) -> Vec<Todo> {
        self.items
            .iter()
            .rev()
            .filter(|t| !(hide_completed && t.is_completed))
            .cloned()
            .collect()
    }

    /// Waits for all queued snapshots to be written.
    pub fn flush(&self) {
        self.persister.flush();
    }

    fn persist(&self) {
        self.persister.submit(self.items.clone());
    }
}

fn dedup_ids(items: Vec<Todo>) -> Vec<Todo> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|todo| {
            let first = seen.insert(todo.id.clone());
            if !first {
                warn!("Dropping todo with duplicate id {}: {}", todo.id, todo.text);
            }
            first
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::StoreFile;
    use std::sync::Arc;

    fn open_mem() -> (Arc<MemBackend>, TodoList) {
        let backend = Arc::new(MemBackend::new());
        let list = TodoList::open(TodoStore::new(Arc::clone(&backend))).unwrap();
        (backend, list)
    }

    fn texts(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn scenario_add_toggle_delete() {
        let (_backend, mut list) = open_mem();
        let milk = list.add("buy milk").unwrap();
        let dog = list.add("walk dog").unwrap();

        assert_eq!(texts(&list.list_view(false)), vec!["walk dog", "buy milk"]);

        list.toggle_completed(&milk.id).unwrap();
        assert_eq!(texts(&list.list_view(true)), vec!["walk dog"]);

        list.delete(&dog.id).unwrap();
        let remaining = list.list_view(false);
        assert_eq!(texts(&remaining), vec!["buy milk"]);
        assert!(remaining[0].is_completed);
    }

    #[test]
    fn add_trims_text() {
        let (_backend, mut list) = open_mem();
        let todo = list.add("  padded  ").unwrap();
        assert_eq!(todo.text, "padded");
        assert!(!todo.is_completed);
    }

    #[test]
    fn blank_add_is_rejected_without_persist() {
        let (backend, mut list) = open_mem();
        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.add("\t\n").is_none());
        list.flush();

        assert!(list.list_view(false).is_empty());
        assert_eq!(backend.write_count(StoreFile::Todos), 0);
    }

    #[test]
    fn unknown_id_is_noop_without_persist() {
        let (backend, mut list) = open_mem();
        list.add("keep").unwrap();
        list.flush();
        let before = list.list_view(false);
        let writes = backend.write_count(StoreFile::Todos);

        let missing = TodoId::from("no-such-id");
        assert!(list.toggle_completed(&missing).is_none());
        assert!(list.delete(&missing).is_none());
        list.flush();

        assert_eq!(list.list_view(false), before);
        assert_eq!(backend.write_count(StoreFile::Todos), writes);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let (_backend, mut list) = open_mem();
        let todo = list.add("a").unwrap();
        assert!(list.toggle_completed(&todo.id).unwrap().is_completed);
        assert!(!list.toggle_completed(&todo.id).unwrap().is_completed);
    }

    #[test]
    fn hide_completed_keeps_reverse_order() {
        let (_backend, mut list) = open_mem();
        let ids: Vec<_> = ["1", "2", "3", "4"]
            .into_iter()
            .map(|t| list.add(t).unwrap().id)
            .collect();
        list.toggle_completed(&ids[1]).unwrap();
        list.toggle_completed(&ids[3]).unwrap();

        assert_eq!(texts(&list.list_view(true)), vec!["3", "1"]);
        assert_eq!(texts(&list.list_view(false)), vec!["4", "3", "2", "1"]);
    }

    #[test]
    fn every_mutation_persists_full_snapshot() {
        let (backend, mut list) = open_mem();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        list.toggle_completed(&a.id).unwrap();
        list.flush();

        assert_eq!(backend.write_count(StoreFile::Todos), 3);
        let store = TodoStore::new(Arc::clone(&backend));
        let stored = store.load();
        assert_eq!(texts(&stored), vec!["a", "b"]);
        assert!(stored[0].is_completed);
    }

    #[test]
    fn reopen_sees_persisted_list() {
        let backend = Arc::new(MemBackend::new());
        {
            let mut list = TodoList::open(TodoStore::new(Arc::clone(&backend))).unwrap();
            list.add("survives").unwrap();
        }
        let list = TodoList::open(TodoStore::new(backend)).unwrap();
        assert_eq!(texts(&list.list_view(false)), vec!["survives"]);
    }

    #[test]
    fn duplicate_ids_in_file_keep_first() {
        let backend = Arc::new(MemBackend::new());
        backend.put_raw(
            StoreFile::Todos,
            r#"[
                {"id": "dup", "text": "a", "isCompleted": false, "createdAt": "2024-05-01T09:30:00"},
                {"id": "dup", "text": "b", "isCompleted": false, "createdAt": "2024-05-01T09:31:00"},
                {"id": "other", "text": "c", "isCompleted": false, "createdAt": "2024-05-01T09:32:00"}
            ]"#,
        );
        let mut list = TodoList::open(TodoStore::new(Arc::clone(&backend))).unwrap();
        assert_eq!(texts(&list.list_view(false)), vec!["c", "a"]);

        let dup = TodoId::from("dup");
        assert!(list.toggle_completed(&dup).unwrap().is_completed);
        list.delete(&dup).unwrap();
        assert!(list.list_view(false).iter().all(|t| t.id != dup));
        list.flush();

        let stored = TodoStore::new(backend).load();
        assert_eq!(texts(&stored), vec!["c"]);
    }

    #[test]
    fn failed_persist_keeps_memory_state() {
        let (backend, mut list) = open_mem();
        backend.set_simulate_write_error(true);
        list.add("only in memory").unwrap();
        list.flush();

        assert_eq!(texts(&list.list_view(false)), vec!["only in memory"]);
        assert_eq!(backend.raw(StoreFile::Todos), None);
    }
}
