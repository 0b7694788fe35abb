//! Locale spacing policy
//!
//! Some scripts (Japanese, Chinese, Thai, ...) are written without spaces
//! between words. Phrase matching and inserted separators depend on which
//! kind of locale is active, so every engine call asks a [`SpacingPolicy`].

pub mod interface;

pub(crate) mod config;
pub(crate) mod loader;
mod locale;

pub use config::{LocaleEntry, LocaleTable, Metadata as LocaleTableMetadata};
pub use interface::*;
pub use loader::{builtin_table, load_table_file, parse_table};
pub use locale::{primary_subtag, LocaleInfo};
