//! Locale table schema
//!
//! This module defines the TOML schema for locale tables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root locale table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleTable {
    #[serde(default)]
    pub metadata: Metadata,
    pub locales: Vec<LocaleEntry>,
}

/// Table metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

/// One locale and its spacing behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    /// Primary language subtag, e.g. "ja"
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether words are separated by spaces
    #[serde(default = "default_true")]
    pub consider_spaces: bool,
}

fn default_true() -> bool {
    true
}

impl LocaleTable {
    /// Look up a locale by primary subtag (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&LocaleEntry> {
        self.locales
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(code))
    }

    /// Validate the table
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.locales.is_empty() {
            return Err("no locales defined".to_string());
        }

        let mut seen = HashSet::new();
        for entry in &self.locales {
            if entry.code.trim().is_empty() {
                return Err("locale with empty code".to_string());
            }
            if !seen.insert(entry.code.to_ascii_lowercase()) {
                return Err(format!("duplicate locale code '{}'", entry.code));
            }
        }

        Ok(())
    }
}
