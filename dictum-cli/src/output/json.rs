//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use dictum_api::{Command, EditResult, Outcome};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one object per command
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct OutcomeData<'a> {
    /// Command that was applied
    pub command: &'a Command,
    /// What the command produced
    pub outcome: &'a Outcome,
    /// Field contents and caret after applying the outcome
    pub field: &'a EditResult,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_outcome(
        &mut self,
        command: &Command,
        outcome: &Outcome,
        field: &EditResult,
    ) -> Result<()> {
        let data = OutcomeData {
            command,
            outcome,
            field,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
