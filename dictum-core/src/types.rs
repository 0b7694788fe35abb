//! Value types produced by the editing engine

use serde::{Deserialize, Serialize};

/// Caret offset into a text buffer, counted in chars.
///
/// Signed because callers may pass out-of-range positions (for instance
/// `-1` when a field has no caret); the engine interprets those instead of
/// rejecting them.
pub type CaretIndex = i64;

/// New buffer contents and caret position after an edit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditResult {
    /// Full text after the edit
    pub value: String,
    /// Caret position after the edit
    pub caret_index: CaretIndex,
}

impl EditResult {
    /// Create a new edit result
    pub fn new(value: impl Into<String>, caret_index: CaretIndex) -> Self {
        Self {
            value: value.into(),
            caret_index,
        }
    }

    /// Result that leaves the buffer and caret as they were
    pub fn unchanged(value: &str, caret_index: CaretIndex) -> Self {
        Self::new(value, caret_index)
    }
}

/// Selected range of a text buffer, in chars
///
/// `start` is inclusive and `end` exclusive, so the range covers both
/// phrases it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionRange {
    /// First selected char
    pub start: usize,
    /// One past the last selected char
    pub end: usize,
}

impl SelectionRange {
    /// Create a new range; `None` when `start > end`
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for a collapsed selection
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
