use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version)]
#[command(about = "A small, file-backed to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store data here instead of ~/.todo-app
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add {
        /// Text of the todo (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List todos, most recent first
    #[command(alias = "ls")]
    List {
        /// Hide completed todos
        #[arg(long, conflicts_with = "all")]
        hide_completed: bool,

        /// Show completed todos even if hideCompleted is set
        #[arg(short, long)]
        all: bool,
    },

    /// Toggle completion of one or more todos
    #[command(alias = "toggle")]
    Done {
        /// Indexes (e.g. 1 3) or ids of the todos
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Delete one or more todos
    #[command(alias = "rm")]
    Delete {
        /// Indexes (e.g. 1 3) or ids of the todos
        #[arg(required = true, num_args = 1..)]
        todos: Vec<String>,
    },

    /// Show or change settings
    Config {
        /// Setting name
        key: Option<String>,

        /// New value
        value: Option<String>,
    },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

impl Commands {
    /// `--hide-completed` / `--all` as an override of the stored default.
    pub fn hide_override(hide_completed: bool, all: bool) -> Option<bool> {
        match (hide_completed, all) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
