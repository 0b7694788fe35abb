//! Compile-time character tables
//!
//! All tables are allocation-free during lookup and built in `const` context.

pub mod terminator;

pub use terminator::{CharTable, PUNCTUATION, SENTENCE_TERMINATORS};
