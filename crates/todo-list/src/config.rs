use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;
use time::Date;
use time::error::{InvalidFormatDescription, Parse};
use time::format_description;

const CONFIG_DIR: &str = "todo-list";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DUE_DATE_FORMAT: &str = "[year]-[month]-[day]";

/// Reasons a due date typed at the prompt is rejected.
#[derive(Debug, Error)]
pub enum DueDateError {
    #[error("invalid due date format: {0}")]
    Format(#[from] InvalidFormatDescription),
    #[error("{0}")]
    Parse(#[from] Parse),
}

/// Interactive shell settings loaded from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// `time` format description used to read due dates.
    pub due_date_format: String,
    /// Print the option menu before every prompt.
    pub show_menu: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            due_date_format: DEFAULT_DUE_DATE_FORMAT.to_owned(),
            show_menu: true,
        }
    }
}

impl ShellConfig {
    /// Load from `explicit` if given, otherwise from the per-user config directory.
    ///
    /// A missing per-user file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/todo-list/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Read and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.due_date_format.trim().is_empty() {
            bail!("due_date_format must not be empty");
        }
        format_description::parse(&self.due_date_format)
            .with_context(|| format!("invalid due_date_format '{}'", self.due_date_format))?;
        Ok(())
    }

    /// Parse a due date typed by the user.
    pub fn parse_due_date(&self, raw: &str) -> Result<Date, DueDateError> {
        let format = format_description::parse(&self.due_date_format)?;
        Ok(Date::parse(raw, &format)?)
    }
}
