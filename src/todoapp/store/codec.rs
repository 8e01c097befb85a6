//! Encode/decode pairs for the two persisted shapes.
//!
//! Output is pretty-printed JSON with every field present. Unknown fields in
//! todo objects are ignored on read.

use crate::error::{Result, TodoError};
use crate::model::{SettingsMap, Todo};

pub fn encode_todos(todos: &[Todo]) -> Result<String> {
    serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)
}

pub fn decode_todos(raw: &str) -> Result<Vec<Todo>> {
    serde_json::from_str(raw).map_err(TodoError::Serialization)
}

pub fn encode_settings(settings: &SettingsMap) -> Result<String> {
    serde_json::to_string_pretty(settings).map_err(TodoError::Serialization)
}

pub fn decode_settings(raw: &str) -> Result<SettingsMap> {
    serde_json::from_str(raw).map_err(TodoError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todos_are_pretty_printed_with_all_fields() {
        let todo = Todo::new("buy milk");
        let json = encode_todos(std::slice::from_ref(&todo)).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"isCompleted\": false"));
        assert!(json.contains("\"createdAt\": "));
        assert!(json.contains(&format!("\"id\": \"{}\"", todo.id)));
    }

    #[test]
    fn decoding_ignores_unknown_fields() {
        let raw = r#"[
            {"id": "1", "text": "a", "isCompleted": true,
             "createdAt": "2024-01-01T00:00:00", "priority": "high"}
        ]"#;
        let todos = decode_todos(raw).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id.as_str(), "1");
        assert!(todos[0].is_completed);
    }

    #[test]
    fn decoding_wrong_shape_fails() {
        assert!(decode_todos(r#"{"not": "a list"}"#).is_err());
        assert!(decode_todos("not json").is_err());
        assert!(decode_settings(r#"{"theme": 1}"#).is_err());
    }

    #[test]
    fn settings_encode_sorted() {
        let mut settings = SettingsMap::new();
        settings.insert("theme".into(), "dark".into());
        settings.insert("hideCompleted".into(), "true".into());
        let json = encode_settings(&settings).unwrap();
        assert_eq!(
            json,
            "{\n  \"hideCompleted\": \"true\",\n  \"theme\": \"dark\"\n}"
        );
        assert_eq!(decode_settings(&json).unwrap(), settings);
    }
}
