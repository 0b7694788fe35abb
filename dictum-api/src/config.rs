//! High-level configuration API

use crate::error::{ApiError, Result};
use dictum_core::language::{load_table_file, LocaleTable};
use dictum_core::{LocaleInfo, SpacingPolicy};
use std::path::Path;
use std::sync::Arc;

/// High-level configuration for an [`Editor`](crate::Editor)
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) locale: String,
    pub(crate) consider_spaces: Option<bool>,
    pub(crate) auto_capitalize: bool,
    pub(crate) auto_space: bool,
    pub(crate) locale_table: Option<Arc<LocaleTable>>,
}

impl Default for Config {
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

impl Config {
    /// Create a configuration for a locale, all other settings default
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The configured locale tag
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether committed text is capitalized to fit its sentence
    pub fn auto_capitalize(&self) -> bool {
        self.auto_capitalize
    }

    /// Whether committed text is padded with spaces
    pub fn auto_space(&self) -> bool {
        self.auto_space
    }

    /// Resolve the spacing flag: the explicit override if set, otherwise
    /// the locale table's answer for the locale
    pub fn consider_spaces(&self) -> bool {
        if let Some(consider_spaces) = self.consider_spaces {
            return consider_spaces;
        }
        let info = match &self.locale_table {
            Some(table) => LocaleInfo::with_table(self.locale.as_str(), Arc::clone(table)),
            None => LocaleInfo::new(self.locale.as_str()),
        };
        info.consider_spaces()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Override the locale's spacing behaviour (`None` = follow the locale)
    pub fn consider_spaces(mut self, consider_spaces: Option<bool>) -> Self {
        self.config.consider_spaces = consider_spaces;
        self
    }

    /// Enable or disable capitalization of committed text
    pub fn auto_capitalize(mut self, enabled: bool) -> Self {
        self.config.auto_capitalize = enabled;
        self
    }

    /// Enable or disable spacing of committed text
    pub fn auto_space(mut self, enabled: bool) -> Self {
        self.config.auto_space = enabled;
        self
    }

    /// Resolve locales against a custom table instead of the built-in one
    pub fn locale_table(mut self, table: LocaleTable) -> Self {
        self.config.locale_table = Some(Arc::new(table));
        self
    }

    /// Load the locale table from a TOML file
    pub fn locale_table_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let table = load_table_file(path)?;
        Ok(self.locale_table(table))
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        // Validate configuration
        if self.config.locale.trim().is_empty() && self.config.consider_spaces.is_none() {
            return Err(ApiError::Config(
                "locale or explicit spacing required".to_string(),
            ));
        }

        Ok(self.config)
    }
}
