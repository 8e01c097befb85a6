use chrono::{NaiveDateTime, Utc};
use colored::Colorize;
use timeago::Formatter;
use todoapp::api::{CmdMessage, MessageLevel};
use todoapp::index::DisplayTodo;
use todoapp::model::SettingsMap;

const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_todos(todos: &[DisplayTodo]) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    let width = todos
        .iter()
        .map(|dt| dt.index.to_string().len())
        .max()
        .unwrap_or(1);

    for dt in todos {
        let idx = format!("{:>width$}.", dt.index.0, width = width);
        let age = format_time_ago(dt.todo.created_at);
        if dt.todo.is_completed {
            println!(
                "{} {} {} {}",
                idx.yellow(),
                DONE_MARKER.dimmed(),
                dt.todo.text.strikethrough().dimmed(),
                age.dimmed()
            );
        } else {
            println!(
                "{} {} {} {}",
                idx.yellow(),
                OPEN_MARKER,
                dt.todo.text,
                age.dimmed()
            );
        }
    }
}

pub(super) fn print_settings(settings: &SettingsMap) {
    if settings.is_empty() {
        println!("No settings stored.");
        return;
    }
    for (key, value) in settings {
        println!("{} = {}", key.bold(), value);
    }
}

fn format_time_ago(created_at: NaiveDateTime) -> String {
    let elapsed = Utc::now()
        .naive_utc()
        .signed_duration_since(created_at)
        .to_std()
        .unwrap_or_default();
    format!("({})", Formatter::new().convert(elapsed))
}
