//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Editing configuration
    #[serde(default)]
    pub editing: EditingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Editing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct EditingConfig {
    /// Default locale tag
    pub locale: String,

    /// Force spacing on or off regardless of locale
    pub consider_spaces: Option<bool>,

    /// Capitalize committed text
    pub auto_capitalize: bool,

    /// Pad committed text with spaces
    pub auto_space: bool,

    /// External locale table (TOML)
    pub locale_table: Option<PathBuf>,
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            consider_spaces: None,
            auto_capitalize: true,
            auto_space: true,
            locale_table: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
