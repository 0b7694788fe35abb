//! Locale table loader
//!
//! Manages the embedded locale table and externally supplied ones.

use std::path::Path;
use std::sync::OnceLock;

use crate::error::{LocaleError, Result};
use crate::language::config::{LocaleEntry, LocaleTable};

/// Embedded locale table
static BUILTIN: OnceLock<LocaleTable> = OnceLock::new();

/// The built-in locale table, parsed on first access
pub fn builtin_table() -> &'static LocaleTable {
    BUILTIN.get_or_init(|| {
        parse_table(include_str!("../../configs/locales.toml")).unwrap_or_else(|e| {
            tracing::warn!("failed to load built-in locale table: {e}");
            fallback_table()
        })
    })
}

/// Parse and validate a locale table from TOML
pub fn parse_table(toml_str: &str) -> Result<LocaleTable> {
    let table: LocaleTable = toml::from_str(toml_str)?;
    table.validate().map_err(LocaleError::Invalid)?;
    Ok(table)
}

/// Load a locale table from a TOML file
pub fn load_table_file(path: impl AsRef<Path>) -> Result<LocaleTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&content)?;
    tracing::debug!(
        path = %path.display(),
        locales = table.locales.len(),
        "loaded locale table"
    );
    Ok(table)
}

/// Minimal table used when the embedded one cannot be parsed
fn fallback_table() -> LocaleTable {
    let entry = |code: &str, consider_spaces| LocaleEntry {
        code: code.to_string(),
        name: String::new(),
        consider_spaces,
    };
    LocaleTable {
        metadata: Default::default(),
        locales: vec![entry("en", true), entry("ja", false), entry("zh", false)],
    }
}
