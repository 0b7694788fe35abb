//! Public API for Dictum dictation editing commands
//!
//! This crate provides a clean, stable interface over the editing engine:
//! an [`Editor`] configured once with a locale, and serializable
//! [`Command`]/[`Outcome`] types for dictation pipelines that dispatch
//! recognized commands.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use dictum_core::{SharedSpacing, SpacingPolicy, TextEditingEngine};
use error::Result;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dictum_core::{CaretIndex, EditResult, SelectionRange};
pub use dto::{Command, Outcome};
pub use error::ApiError;

/// Main entry point for dictation editing commands
///
/// The spacing policy lives behind an [`Arc`], so the handle returned by
/// [`Editor::spacing`] can retarget a running editor from another thread.
#[derive(Debug)]
pub struct Editor {
    engine: TextEditingEngine<Arc<SharedSpacing>>,
    config: Config,
}

impl Editor {
    /// Create an editor with default configuration (English)
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    /// Create an editor for a specific locale
    pub fn with_locale(locale: &str) -> Result<Self> {
        let config = Config::builder().locale(locale).build()?;
        Ok(Self::from_config(config))
    }

    /// Create an editor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_config(config))
    }

    fn from_config(config: Config) -> Self {
        let consider_spaces = config.consider_spaces();
        tracing::debug!(locale = config.locale(), consider_spaces, "creating editor");
        Self {
            engine: TextEditingEngine::new(Arc::new(SharedSpacing::new(consider_spaces))),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the spacing policy
    pub fn spacing(&self) -> Arc<SharedSpacing> {
        Arc::clone(self.engine.policy())
    }

    /// Whether the active locale separates words with spaces
    pub fn consider_spaces(&self) -> bool {
        self.engine.policy().consider_spaces()
    }

    /// Switch to another locale
    ///
    /// An explicit spacing override in the configuration still wins.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.config.locale = locale.into();
        self.engine
            .policy()
            .set_consider_spaces(self.config.consider_spaces());
    }

    /// Replace the closest `delete_phrase` left of the caret
    pub fn replace_phrase(
        &self,
        value: &str,
        caret_index: CaretIndex,
        delete_phrase: &str,
        insert_phrase: &str,
    ) -> EditResult {
        self.engine
            .replace_phrase(value, caret_index, delete_phrase, insert_phrase)
    }

    /// Delete the closest `phrase` left of the caret
    pub fn delete_phrase(&self, value: &str, caret_index: CaretIndex, phrase: &str) -> EditResult {
        self.engine.replace_phrase(value, caret_index, phrase, "")
    }

    /// Insert `insert_phrase` before the closest `before_phrase` left of the caret
    pub fn insert_before(
        &self,
        value: &str,
        caret_index: CaretIndex,
        insert_phrase: &str,
        before_phrase: &str,
    ) -> EditResult {
        self.engine
            .insert_before(value, caret_index, insert_phrase, before_phrase)
    }

    /// Select from `start_phrase` through `end_phrase`
    pub fn select_between(
        &self,
        value: &str,
        caret_index: CaretIndex,
        start_phrase: &str,
        end_phrase: &str,
    ) -> Option<SelectionRange> {
        self.engine
            .select_between(value, caret_index, start_phrase, end_phrase)
    }

    /// Start of the next sentence
    pub fn nav_next_sentence(&self, value: &str, caret_index: CaretIndex) -> usize {
        self.engine.nav_next_sentence(value, caret_index)
    }

    /// Start of the current sentence
    pub fn nav_prev_sentence(&self, value: &str, caret_index: CaretIndex) -> usize {
        self.engine.nav_prev_sentence(value, caret_index)
    }

    /// Pad `commit_text` with spaces to fit at the caret
    pub fn smart_spacing(&self, value: &str, caret_index: CaretIndex, commit_text: &str) -> String {
        self.engine.smart_spacing(value, caret_index, commit_text)
    }

    /// Capitalize `commit_text` to fit at the caret
    pub fn smart_capitalization(
        &self,
        value: &str,
        caret_index: CaretIndex,
        commit_text: &str,
    ) -> String {
        self.engine
            .smart_capitalization(value, caret_index, commit_text)
    }

    /// Format `commit_text` for committing at the caret
    ///
    /// Honors the configured auto-capitalize and auto-space switches;
    /// spacing is never applied for locales written without spaces.
    pub fn commit_text(&self, value: &str, caret_index: CaretIndex, commit_text: &str) -> String {
        let text = if self.config.auto_capitalize {
            self.engine
                .smart_capitalization(value, caret_index, commit_text)
        } else {
            commit_text.to_string()
        };

        if self.config.auto_space && self.consider_spaces() {
            self.engine.smart_spacing(value, caret_index, &text)
        } else {
            text
        }
    }

    /// Apply a recognized command to the field contents
    pub fn apply(&self, value: &str, caret_index: CaretIndex, command: &Command) -> Outcome {
        tracing::debug!(command = command.name(), caret_index, "applying command");
        match command {
            Command::Replace { delete, insert } => {
                Outcome::Edit(self.replace_phrase(value, caret_index, delete, insert))
            }
            Command::Delete { phrase } => {
                Outcome::Edit(self.delete_phrase(value, caret_index, phrase))
            }
            Command::InsertBefore { insert, before } => {
                Outcome::Edit(self.insert_before(value, caret_index, insert, before))
            }
            Command::Select { start, end } => {
                Outcome::Selection(self.select_between(value, caret_index, start, end))
            }
            Command::NextSentence => Outcome::Caret(self.nav_next_sentence(value, caret_index)),
            Command::PrevSentence => Outcome::Caret(self.nav_prev_sentence(value, caret_index)),
            Command::Spacing { text } => {
                Outcome::Text(self.smart_spacing(value, caret_index, text))
            }
            Command::Capitalize { text } => {
                Outcome::Text(self.smart_capitalization(value, caret_index, text))
            }
            Command::Commit { text } => Outcome::Text(self.commit_text(value, caret_index, text)),
        }
    }

    /// Parse a JSON command and apply it
    #[cfg(feature = "serde")]
    pub fn apply_json(&self, value: &str, caret_index: CaretIndex, json: &str) -> Result<Outcome> {
        let command = Command::from_json(json)?;
        Ok(self.apply(value, caret_index, &command))
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Apply a command with the editor for `locale`
pub fn apply_command(
    locale: &str,
    value: &str,
    caret_index: CaretIndex,
    command: &Command,
) -> Result<Outcome> {
    let editor = Editor::with_locale(locale)?;
    Ok(editor.apply(value, caret_index, command))
}
