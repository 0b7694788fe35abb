//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use dictum_api::{Command, EditResult, Outcome};
use std::io::{self, Write};

/// Plain text formatter
///
/// Edits print the new text followed by a `caret:` line, navigation prints
/// only the caret, and committed text prints as-is.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_outcome(
        &mut self,
        _command: &Command,
        outcome: &Outcome,
        field: &EditResult,
    ) -> Result<()> {
        match outcome {
            Outcome::Edit(result) => {
                writeln!(self.writer, "{}", result.value)?;
                writeln!(self.writer, "caret: {}", result.caret_index)?;
            }
            Outcome::Selection(Some(range)) => {
                let selected: String = field
                    .value
                    .chars()
                    .skip(range.start)
                    .take(range.len())
                    .collect();
                writeln!(self.writer, "selection: {}..{}", range.start, range.end)?;
                writeln!(self.writer, "{selected}")?;
            }
            Outcome::Selection(None) => writeln!(self.writer, "no selection")?,
            Outcome::Caret(caret) => writeln!(self.writer, "caret: {caret}")?,
            Outcome::Text(text) => writeln!(self.writer, "{text}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
