//! # Display Indexes
//!
//! Todo ids are opaque UUID strings, fine for storage but awkward to type. The
//! terminal client numbers todos instead: `1` is the most recently added,
//! `2` the one before it, and so on.
//!
//! Indexes are always assigned over the *full* list, completed todos
//! included. Hiding completed todos leaves gaps but never renumbers, so
//! `todo done 3` means the same todo whatever the current view shows.
//!
//! A selector that is not a number is taken as an id, or a unique id prefix.
//! A number of four or more digits with no todo at that index is also tried as
//! an id prefix.

use crate::model::{Todo, TodoId};
use std::str::FromStr;

// Shorter numbers are always indexes; `7` must not hit a random id.
const MIN_NUMERIC_ID_PREFIX: usize = 4;

/// A 1-based position in the most-recent-first list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User input naming a todo, either by display index or by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSelector {
    Index(DisplayIndex),
    Id(String),
}

impl std::fmt::Display for TodoSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoSelector::Index(idx) => write!(f, "{}", idx),
            TodoSelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

impl FromStr for TodoSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty todo selector".to_string());
        }
        match s.parse::<usize>() {
            // Leading zeros only make sense as part of an id
            Ok(_) if s.len() > 1 && s.starts_with('0') => Ok(TodoSelector::Id(s.to_string())),
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(TodoSelector::Index(DisplayIndex(n))),
            Err(_) => Ok(TodoSelector::Id(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub todo: Todo,
    pub index: DisplayIndex,
}

/// Numbers a most-recent-first list, starting at 1.
pub fn index_todos(todos: Vec<Todo>) -> Vec<DisplayTodo> {
    todos
        .into_iter()
        .enumerate()
        .map(|(i, todo)| DisplayTodo {
            todo,
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// Resolves a selector against an indexed list.
///
/// Ids match exactly first, then as a prefix; an ambiguous prefix is an error.
/// A long enough number with no todo at that index is retried as an id prefix,
/// so ids starting with digits stay reachable.
pub fn resolve(indexed: &[DisplayTodo], selector: &TodoSelector) -> Result<TodoId, String> {
    match selector {
        TodoSelector::Index(idx) => {
            if let Some(dt) = indexed.iter().find(|dt| dt.index == *idx) {
                return Ok(dt.todo.id.clone());
            }
            let digits = idx.to_string();
            if digits.len() < MIN_NUMERIC_ID_PREFIX {
                return Err(format!("No todo at index {}", idx));
            }
            resolve_id(indexed, &digits)?.ok_or_else(|| format!("No todo at index {}", idx))
        }
        TodoSelector::Id(raw) => {
            resolve_id(indexed, raw)?.ok_or_else(|| format!("No todo with id {}", selector))
        }
    }
}

fn resolve_id(indexed: &[DisplayTodo], raw: &str) -> Result<Option<TodoId>, String> {
    if let Some(dt) = indexed.iter().find(|dt| dt.todo.id.as_str() == raw) {
        return Ok(Some(dt.todo.id.clone()));
    }
    let mut candidates = indexed
        .iter()
        .filter(|dt| dt.todo.id.as_str().starts_with(raw));
    match (candidates.next(), candidates.next()) {
        (Some(dt), None) => Ok(Some(dt.todo.id.clone())),
        (Some(_), Some(_)) => Err(format!("Id prefix \"{}\" matches several todos", raw)),
        (None, _) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo_with_id(id: &str, text: &str) -> Todo {
        let mut todo = Todo::new(text);
        todo.id = TodoId::from(id);
        todo
    }

    #[test]
    fn parses_selectors() {
        assert_eq!(
            "3".parse::<TodoSelector>().unwrap(),
            TodoSelector::Index(DisplayIndex(3))
        );
        assert_eq!(
            "ab12".parse::<TodoSelector>().unwrap(),
            TodoSelector::Id("ab12".to_string())
        );
        assert!("0".parse::<TodoSelector>().is_err());
        assert!("  ".parse::<TodoSelector>().is_err());
    }

    #[test]
    fn indexes_start_at_one() {
        let indexed = index_todos(vec![Todo::new("newest"), Todo::new("older")]);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(indexed[1].todo.text, "older");
    }

    #[test]
    fn resolves_index_and_ids() {
        let indexed = index_todos(vec![
            todo_with_id("abc-1", "a"),
            todo_with_id("abd-2", "b"),
            todo_with_id("abc", "c"),
        ]);

        let by_index = resolve(&indexed, &TodoSelector::Index(DisplayIndex(2))).unwrap();
        assert_eq!(by_index.as_str(), "abd-2");

        // Exact match beats a prefix match
        let exact = resolve(&indexed, &TodoSelector::Id("abc".into())).unwrap();
        assert_eq!(exact.as_str(), "abc");

        let prefix = resolve(&indexed, &TodoSelector::Id("abd".into())).unwrap();
        assert_eq!(prefix.as_str(), "abd-2");

        assert!(resolve(&indexed, &TodoSelector::Id("ab".into())).is_err());
        assert!(resolve(&indexed, &TodoSelector::Id("zzz".into())).is_err());
        assert!(resolve(&indexed, &TodoSelector::Index(DisplayIndex(9))).is_err());
    }

    #[test]
    fn numeric_id_prefix_falls_back_when_index_is_free() {
        let indexed = index_todos(vec![
            todo_with_id("12345678-aaaa", "digits"),
            todo_with_id("abcdef00-bbbb", "letters"),
        ]);

        let selector: TodoSelector = "12345678".parse().unwrap();
        assert_eq!(resolve(&indexed, &selector).unwrap().as_str(), "12345678-aaaa");

        // A taken index still wins over an id prefix
        let first: TodoSelector = "1".parse().unwrap();
        assert_eq!(resolve(&indexed, &first).unwrap().as_str(), "12345678-aaaa");
        let second: TodoSelector = "2".parse().unwrap();
        assert_eq!(resolve(&indexed, &second).unwrap().as_str(), "abcdef00-bbbb");

        // Short numbers never fall back
        let short = index_todos(vec![todo_with_id("7abc", "seven")]);
        assert!(resolve(&short, &TodoSelector::Index(DisplayIndex(7))).is_err());

        assert_eq!(
            "0042".parse::<TodoSelector>().unwrap(),
            TodoSelector::Id("0042".to_string())
        );
    }
}
