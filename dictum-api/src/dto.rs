//! Data Transfer Objects for API

use dictum_core::text::{clamp_caret, to_caret};
use dictum_core::{CaretIndex, EditResult, SelectionRange};

/// An editing command recognized from speech
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "op", rename_all = "snake_case")
)]
pub enum Command {
    /// Replace the closest phrase left of the caret
    Replace {
        /// Phrase to remove
        delete: String,
        /// Phrase to put in its place (empty = delete)
        #[cfg_attr(feature = "serde", serde(default))]
        insert: String,
    },
    /// Delete the closest phrase left of the caret
    Delete {
        /// Phrase to remove
        phrase: String,
    },
    /// Insert a phrase before the closest anchor phrase left of the caret
    InsertBefore {
        /// Phrase to insert
        insert: String,
        /// Anchor phrase
        before: String,
    },
    /// Select between two phrases left of the caret
    Select {
        /// First phrase of the selection
        start: String,
        /// Last phrase of the selection
        end: String,
    },
    /// Move to the start of the next sentence
    NextSentence,
    /// Move to the start of the current sentence
    PrevSentence,
    /// Pad text with spaces to fit at the caret
    Spacing {
        /// Text to be committed
        text: String,
    },
    /// Capitalize text to fit at the caret
    Capitalize {
        /// Text to be committed
        text: String,
    },
    /// Format text for committing (capitalization and spacing)
    Commit {
        /// Text to be committed
        text: String,
    },
}

impl Command {
    /// Short name of the command, as used in logs and JSON
    pub fn name(&self) -> &'static str {
        match self {
            Command::Replace { .. } => "replace",
            Command::Delete { .. } => "delete",
            Command::InsertBefore { .. } => "insert_before",
            Command::Select { .. } => "select",
            Command::NextSentence => "next_sentence",
            Command::PrevSentence => "prev_sentence",
            Command::Spacing { .. } => "spacing",
            Command::Capitalize { .. } => "capitalize",
            Command::Commit { .. } => "commit",
        }
    }

    /// Parse a command from JSON
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of applying a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "result", rename_all = "snake_case")
)]
pub enum Outcome {
    /// New field contents and caret
    Edit(EditResult),
    /// Range to select, if one could be formed
    Selection(Option<SelectionRange>),
    /// New caret position
    Caret(usize),
    /// Text ready to be inserted at the caret
    Text(String),
}

impl Outcome {
    /// State of the field once the caller has applied this outcome
    ///
    /// Selections move the caret to the end of the selected range, text is
    /// inserted at the (clamped) caret.
    pub fn field_state(&self, value: &str, caret_index: CaretIndex) -> EditResult {
        match self {
            Outcome::Edit(result) => result.clone(),
            Outcome::Selection(Some(range)) => EditResult::new(value, to_caret(range.end)),
            Outcome::Selection(None) => EditResult::unchanged(value, caret_index),
            Outcome::Caret(caret) => EditResult::new(value, to_caret(*caret)),
            Outcome::Text(text) => {
                let caret = clamp_caret(caret_index, value.chars().count());
                let split = value
                    .char_indices()
                    .nth(caret)
                    .map_or(value.len(), |(byte, _)| byte);
                let mut new_value = String::with_capacity(value.len() + text.len());
                new_value.push_str(&value[..split]);
                new_value.push_str(text);
                new_value.push_str(&value[split..]);
                EditResult::new(new_value, to_caret(caret + text.chars().count()))
            }
        }
    }
}
