//! Output formatting module

use anyhow::Result;
use dictum_api::{Command, EditResult, Outcome};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the outcome of one command
    ///
    /// `field` is the state of the field once the outcome is applied.
    fn format_outcome(
        &mut self,
        command: &Command,
        outcome: &Outcome,
        field: &EditResult,
    ) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
