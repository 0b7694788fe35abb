//! Text-editing engine for dictation editing commands
//!
//! Dictation users edit by voice: "delete the", "replace cat with dog",
//! "insert very before happy", "select from is to test", "go to the next
//! sentence". This crate implements those commands as pure functions over
//! the current text of a field and its caret, plus the spacing and
//! capitalization fixes applied to newly dictated text.
//!
//! Whether the active language separates words with spaces changes how
//! phrases are matched; that answer comes from a [`SpacingPolicy`].
//!
//! # Example
//!
//! ```rust
//! use dictum_core::{LocaleInfo, TextEditingEngine};
//!
//! let engine = TextEditingEngine::new(LocaleInfo::new("en-US"));
//!
//! let result = engine.replace_phrase("The cow jumped over the moon", 28, "the", "");
//! assert_eq!(result.value, "The cow jumped over moon");
//! assert_eq!(result.caret_index, 19);
//!
//! let range = engine.select_between("This is a test.", 15, "is", "test").unwrap();
//! assert_eq!((range.start, range.end), (5, 14));
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod matcher;
pub mod tables;
pub mod text;
pub mod types;

pub use engine::{
    commit_text, insert_before, nav_next_sentence, nav_prev_sentence, replace_phrase,
    select_between, smart_capitalization, smart_spacing, TextEditingEngine,
};
pub use error::{LocaleError, Result};
pub use language::{LocaleInfo, SharedSpacing, SpaceDelimited, SpacingPolicy, Unspaced};
pub use types::{CaretIndex, EditResult, SelectionRange};
