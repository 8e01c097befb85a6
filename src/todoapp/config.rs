use crate::error::{Result, TodoError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = ".todo-app";
pub const TODOS_FILENAME: &str = "todos.json";
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Well-known settings keys read by the terminal client.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const HIDE_COMPLETED: &str = "hideCompleted";
}

/// Where the store files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPaths {
    data_dir: PathBuf,
}

impl TodoPaths {
    /// Uses `data_dir` if given, otherwise `<home>/.todo-app`.
    pub fn resolve(data_dir: Option<PathBuf>) -> Result<Self> {
        match data_dir {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::from_home(),
        }
    }

    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_home() -> Result<Self> {
        let base = BaseDirs::new()
            .ok_or_else(|| TodoError::Store("Could not determine home directory".to_string()))?;
        Ok(Self::new(base.home_dir().join(DATA_DIR_NAME)))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

/// Parses a stored boolean setting. Anything but `true` reads as false.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some(v) if v.eq_ignore_ascii_case("true"))
}
