//! Configuration management for timesel
//!
//! The config file lives at `<config dir>/timesel/config.toml` and can be
//! relocated with `TIMESEL_CONFIG_DIR`. Every field has a default, so a
//! missing file or a partial file is valid.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item, Table};

use crate::selection::DriftTolerance;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TIMESEL_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading, saving or migrating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory (set TIMESEL_CONFIG_DIR)")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config is not valid TOML: {0}")]
    Document(#[from] toml_edit::TomlError),
}

/// Selection behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Maximum drift between the scrubber time and the pause time before
    /// the pause is considered stale.
    pub drift_tolerance: DriftTolerance,
    /// Whether hover previews drive graphics when the timeline starts.
    pub prefer_hover_graphics: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            drift_tolerance: DriftTolerance::DEFAULT,
            prefer_hover_graphics: true,
        }
    }
}

/// Coalescing of rapid updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoalesceConfig {
    /// Window in milliseconds during which updates are merged (0 = none).
    pub window_ms: u64,
}

impl Default for CoalesceConfig {
    fn default() -> Self {
        Self { window_ms: 16 }
    }
}

impl CoalesceConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selection: SelectionConfig,
    pub coalesce: CoalesceConfig,
}

impl Config {
    /// Directory holding the config file.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join("timesel"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Full path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load the config file, falling back to defaults when it is missing.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Write the config file, creating its directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| ConfigError::Write { path, source })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct MigrateResult {
    /// The migrated file content.
    pub content: String,
    /// Fields that were added, as `section.key`.
    pub added_fields: Vec<String>,
    /// Sections that did not exist before.
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, comments and ordering are preserved.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = Config::default().to_toml()?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            doc.insert(section, Item::Table(Table::new()));
            sections_added.push(section.to_string());
        }
        let Some(table) = doc[section].as_table_mut() else {
            // A scalar where a section belongs; leave it for the parser to report.
            continue;
        };

        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
