//! # API Facade
//!
//! A thin facade over the state containers and the single entry point for any
//! client (the bundled terminal client, a GUI, tests).
//!
//! The facade:
//! - **Opens** both stores against one backend
//! - **Normalizes inputs** (display indexes and id prefixes to [`TodoId`]s)
//! - **Returns structured results** ([`CmdResult`]) instead of printing
//!
//! It holds no business rules of its own. Trimming, blank rejection, ordering
//! and persistence all belong to [`crate::state`].
//!
//! ## Backend Agnostic
//!
//! [`TodoApi::open`] takes any [`StorageBackend`]:
//! - Production: [`FsBackend`] via [`TodoApi::open_dir`]
//! - Testing: [`crate::store::mem_backend::MemBackend`]

use crate::config::{keys, parse_flag, Theme, TodoPaths};
use crate::error::{Result, TodoError};
use crate::index::{index_todos, resolve, DisplayTodo, TodoSelector};
use crate::model::{SettingsMap, Todo, TodoId};
use crate::state::settings::Settings;
use crate::state::todos::TodoList;
use crate::store::fs_backend::FsBackend;
use crate::store::settings::SettingsStore;
use crate::store::todos::TodoStore;
use crate::store::StorageBackend;
use log::debug;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_todos: Vec<Todo>,
    pub listed_todos: Vec<DisplayTodo>,
    pub settings: Option<SettingsMap>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_todos(mut self, todos: Vec<DisplayTodo>) -> Self {
        self.listed_todos = todos;
        self
    }

    pub fn with_settings(mut self, settings: SettingsMap) -> Self {
        self.settings = Some(settings);
        self
    }
}

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

#[derive(Debug, Clone, Copy)]
pub enum ThemeAction {
    Show,
    Set(Theme),
    Toggle,
}

/// The main API facade.
pub struct TodoApi {
    todos: TodoList,
    settings: Settings,
}

impl TodoApi {
    /// Loads both stores from `backend` and starts their writers.
    pub fn open<B: StorageBackend>(backend: Arc<B>) -> Result<Self> {
        let todo_store = TodoStore::new(Arc::clone(&backend));
        let settings_store = SettingsStore::new(backend);
        debug!(
            "Todos at {}, settings at {}",
            todo_store.location().display(),
            settings_store.location().display()
        );
        let todos = TodoList::open(todo_store)?;
        let settings = Settings::open(settings_store)?;
        Ok(Self { todos, settings })
    }

    /// Opens the file stores under `paths`, creating the directory if needed.
    pub fn open_dir(paths: &TodoPaths) -> Result<Self> {
        debug!("Opening stores in {}", paths.data_dir().display());
        Self::open(Arc::new(FsBackend::open(paths.data_dir())))
    }

    pub fn add_todo(&mut self, text: &str) -> Result<CmdResult> {
        let todo = self
            .todos
            .add(text)
            .ok_or_else(|| TodoError::Api("Todo text cannot be empty".into()))?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Added: {}", todo.text)));
        result.affected_todos.push(todo);
        Ok(result)
    }

    /// Lists todos, most recent first.
    ///
    /// `hide_completed` overrides the stored `hideCompleted` setting.
    pub fn list_todos(&self, hide_completed: Option<bool>) -> Result<CmdResult> {
        let hide = hide_completed
            .unwrap_or_else(|| parse_flag(self.settings.get(keys::HIDE_COMPLETED)));
        let listed = index_todos(self.todos.list_view(false))
            .into_iter()
            .filter(|dt| !(hide && dt.todo.is_completed))
            .collect();
        Ok(CmdResult::default().with_listed_todos(listed))
    }

    pub fn toggle_todos<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_selectors(selectors)?;
        let mut result = CmdResult::default();
        for id in ids {
            if let Some(todo) = self.todos.toggle_completed(&id) {
                let verb = if todo.is_completed { "Completed" } else { "Reopened" };
                result.add_message(CmdMessage::success(format!("{}: {}", verb, todo.text)));
                result.affected_todos.push(todo);
            }
        }
        Ok(result)
    }

    pub fn delete_todos<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_selectors(selectors)?;
        let mut result = CmdResult::default();
        for id in ids {
            if let Some(todo) = self.todos.delete(&id) {
                result.add_message(CmdMessage::success(format!("Deleted: {}", todo.text)));
                result.affected_todos.push(todo);
            }
        }
        Ok(result)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        match action {
            ConfigAction::ShowAll => Ok(CmdResult::default().with_settings(self.settings.snapshot())),
            ConfigAction::ShowKey(key) => {
                let mut result = CmdResult::default();
                match self.settings.get(&key) {
                    Some(value) => result.add_message(CmdMessage::info(value)),
                    None => result.add_message(CmdMessage::warning(format!("{} is not set", key))),
                }
                Ok(result)
            }
            ConfigAction::Set(key, value) => {
                self.settings.set(key.clone(), value.clone());
                let mut result = CmdResult::default().with_settings(self.settings.snapshot());
                result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
                Ok(result)
            }
        }
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<CmdResult> {
        let current = self.current_theme();
        let next = match action {
            ThemeAction::Show => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info(current.as_str()));
                return Ok(result);
            }
            ThemeAction::Set(theme) => theme,
            ThemeAction::Toggle => current.toggled(),
        };
        self.settings.set(keys::THEME, next.as_str());
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Theme set to {}", next)));
        Ok(result)
    }

    pub fn current_theme(&self) -> Theme {
        self.settings
            .get(keys::THEME)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    /// Waits until every queued write of both stores is on disk.
    pub fn flush(&self) {
        self.todos.flush();
        self.settings.flush();
    }

    // Resolved up front against one view, so `rm 1 2` names the todos that
    // were 1 and 2 before anything was removed.
    fn resolve_selectors<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Vec<TodoId>> {
        if inputs.is_empty() {
            return Err(TodoError::Api("No todos selected".into()));
        }
        let indexed = index_todos(self.todos.list_view(false));
        let mut ids: Vec<TodoId> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let selector: TodoSelector = input.as_ref().parse().map_err(TodoError::Api)?;
            let id = resolve(&indexed, &selector).map_err(TodoError::Api)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
