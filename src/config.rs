// src/config.rs

//! recipebox configuration file
//!
//! # Example config.toml
//!
//! ```toml
//! [database]
//! path = "/home/me/.local/share/recipebox/recipebox.db"
//!
//! [editor]
//! # Refuse to save recipes without any instruction line
//! require_instructions = true
//! # Ask before discarding components when leaving sectioned mode
//! confirm_discard = true
//!
//! [logging]
//! level = "info"
//! ```

use crate::error::Result;
use crate::section::{DiscardPolicy, FlattenOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Editing and save-time validation behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_true")]
    pub require_instructions: bool,

    #[serde(default = "default_true")]
    pub confirm_discard: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            require_instructions: true,
            confirm_discard: true,
        }
    }
}

impl EditorConfig {
    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            require_instructions: self.require_instructions,
        }
    }

    /// Policy for leaving sectioned mode given whether the user confirmed
    pub fn discard_policy(&self, confirmed: bool) -> DiscardPolicy {
        if confirmed || !self.confirm_discard {
            DiscardPolicy::Confirmed
        } else {
            DiscardPolicy::RequireConfirmation
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("recipebox").join("recipebox.db"))
        .unwrap_or_else(|| PathBuf::from("recipebox.db"))
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipebox").join("config.toml"))
}

impl Config {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load an explicit config file, or the default one if it exists
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Render this configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
