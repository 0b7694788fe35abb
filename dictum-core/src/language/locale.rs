//! Locale tags resolved to spacing policies

use std::sync::Arc;

use super::config::LocaleTable;
use super::interface::SpacingPolicy;
use super::loader::builtin_table;

/// Primary language subtag of a locale tag, lowercased
///
/// `"ja-JP"`, `"ja_JP"` and `"JA"` all yield `"ja"`.
pub fn primary_subtag(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// A locale and the table used to resolve its spacing behaviour
#[derive(Debug, Clone)]
pub struct LocaleInfo {
    locale: String,
    table: Option<Arc<LocaleTable>>,
}

impl LocaleInfo {
    /// Resolve against the built-in table
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            table: None,
        }
    }

    /// Resolve against a custom table
    pub fn with_table(locale: impl Into<String>, table: Arc<LocaleTable>) -> Self {
        Self {
            locale: locale.into(),
            table: Some(table),
        }
    }

    /// The locale tag as given
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// True if the table lists this locale
    pub fn is_known(&self) -> bool {
        self.table().get(&primary_subtag(&self.locale)).is_some()
    }

    fn table(&self) -> &LocaleTable {
        self.table.as_deref().unwrap_or_else(|| builtin_table())
    }
}

impl SpacingPolicy for LocaleInfo {
    fn consider_spaces(&self) -> bool {
        self.table()
            .get(&primary_subtag(&self.locale))
            .map_or(true, |entry| entry.consider_spaces)
    }
}
