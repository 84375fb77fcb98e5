//! Configuration module for tagtree
//!
//! Holds defaults for the CLI (filter mode, default payload, output options).
//! Configuration is read from the user's config directory; a missing file
//! means defaults. The file is never written by tagtree.

use crate::filter::FilterMode;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct TagtreeConfig {
    /// How filter text is interpreted when `--regex` is not given
    #[serde(default)]
    pub filter_mode: FilterMode,

    /// Payload file used when a command is given none
    #[serde(default)]
    pub payload: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Show `path(DataType)` next to tree nodes
    #[serde(default)]
    pub show_tooltips: bool,
}

impl TagtreeConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("tagtree").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, falling back to defaults if absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
