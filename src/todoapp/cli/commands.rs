//! # CLI Layer
//!
//! This module is **one possible client** for todoapp, not the application
//! itself. It is the only place that:
//! - Parses arguments
//! - Writes to stdout/stderr
//! - Decides exit codes
//!
//! Each `handle_*` function calls one [`TodoApi`] method and prints the
//! returned [`todoapp::api::CmdResult`]. Business rules stay in the library.
//!
//! Before returning, `run` flushes both stores so every accepted mutation is
//! on disk when the process exits.

use super::print::{print_messages, print_settings, print_todos};
use super::setup::{Cli, Commands, ThemeArg};
use clap::Parser;
use todoapp::api::{ConfigAction, ThemeAction, TodoApi};
use todoapp::config::{Theme, TodoPaths};
use todoapp::error::Result;
use todoapp::logging::init_logging;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose)?;

    let paths = TodoPaths::resolve(cli.data_dir.clone())?;
    let mut api = TodoApi::open_dir(&paths)?;

    let outcome = match cli.command {
        Some(Commands::Add { text }) => handle_add(&mut api, &text.join(" ")),
        Some(Commands::List {
            hide_completed,
            all,
        }) => handle_list(&api, Commands::hide_override(hide_completed, all)),
        Some(Commands::Done { todos }) => handle_done(&mut api, &todos),
        Some(Commands::Delete { todos }) => handle_delete(&mut api, &todos),
        Some(Commands::Config { key, value }) => handle_config(&mut api, key, value),
        Some(Commands::Theme { action }) => handle_theme(&mut api, action),
        None => handle_list(&api, None),
    };

    api.flush();
    outcome
}

fn handle_add(api: &mut TodoApi, text: &str) -> Result<()> {
    let result = api.add_todo(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &TodoApi, hide_completed: Option<bool>) -> Result<()> {
    let result = api.list_todos(hide_completed)?;
    print_todos(&result.listed_todos);
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(api: &mut TodoApi, todos: &[String]) -> Result<()> {
    let result = api.toggle_todos(todos)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut TodoApi, todos: &[String]) -> Result<()> {
    let result = api.delete_todos(todos)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &mut TodoApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api.config(action)?;
    if show_all {
        if let Some(settings) = &result.settings {
            print_settings(settings);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_theme(api: &mut TodoApi, action: Option<ThemeArg>) -> Result<()> {
    let action = match action {
        None => ThemeAction::Show,
        Some(ThemeArg::Light) => ThemeAction::Set(Theme::Light),
        Some(ThemeArg::Dark) => ThemeAction::Set(Theme::Dark),
        Some(ThemeArg::Toggle) => ThemeAction::Toggle,
    };
    let result = api.theme(action)?;
    print_messages(&result.messages);
    Ok(())
}
