//! Editing command implementations

use anyhow::Context;
use clap::Args;
use dictum_api::{CaretIndex, Command, Config, Editor};
use dictum_core::text::to_caret;
use std::path::PathBuf;

use super::{GlobalArgs, OutputFormat};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// The text field a command operates on
#[derive(Debug, Clone, Args)]
pub struct FieldArgs {
    /// Contents of the text field
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the field contents from a file (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Caret position in characters (default: end of the text)
    #[arg(long, allow_negative_numbers = true)]
    pub caret: Option<CaretIndex>,
}

impl FieldArgs {
    /// Load the field contents and resolve the caret
    pub fn load(&self) -> CliResult<(String, CaretIndex)> {
        let value = match (&self.text, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => FileReader::read_field(path)?,
            (None, None) => return Err(CliError::MissingText.into()),
        };
        let caret = match self.caret {
            Some(caret) => caret,
            None => to_caret(value.chars().count()),
        };
        Ok((value, caret))
    }
}

/// Arguments for the replace command
#[derive(Debug, Clone, Args)]
pub struct ReplaceArgs {
    /// Phrase to replace
    pub phrase: String,

    /// Replacement phrase; without it the phrase is deleted
    #[arg(short, long, value_name = "PHRASE")]
    pub with: Option<String>,

    #[command(flatten)]
    pub field: FieldArgs,
}

/// Arguments for the insert-before command
#[derive(Debug, Clone, Args)]
pub struct InsertBeforeArgs {
    /// Phrase to insert
    pub phrase: String,

    /// Anchor phrase to insert in front of
    #[arg(short, long, value_name = "PHRASE")]
    pub before: String,

    #[command(flatten)]
    pub field: FieldArgs,
}

/// Arguments for the select command
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// First phrase of the selection
    #[arg(long, value_name = "PHRASE")]
    pub from: String,

    /// Last phrase of the selection
    #[arg(long, value_name = "PHRASE")]
    pub to: String,

    #[command(flatten)]
    pub field: FieldArgs,
}

/// Arguments for sentence navigation
#[derive(Debug, Clone, Args)]
pub struct NavArgs {
    #[command(flatten)]
    pub field: FieldArgs,
}

/// Arguments for commands that format text to be committed
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Recognized text to commit at the caret
    #[arg(allow_hyphen_values = true)]
    pub commit_text: String,

    #[command(flatten)]
    pub field: FieldArgs,
}

/// Resolved settings for one editing run
pub struct EditSession {
    editor: Editor,
    format: OutputFormat,
    pretty_json: bool,
}

impl EditSession {
    /// Combine the config file with command-line overrides
    pub fn new(global: &GlobalArgs) -> CliResult<Self> {
        let cli_config = CliConfig::load(global.config.as_deref())?;
        let editing = &cli_config.editing;

        let locale = global
            .locale
            .clone()
            .unwrap_or_else(|| editing.locale.clone());
        let mut builder = Config::builder()
            .locale(locale)
            .consider_spaces(editing.consider_spaces)
            .auto_capitalize(editing.auto_capitalize)
            .auto_space(editing.auto_space);
        if let Some(path) = &editing.locale_table {
            builder = builder
                .locale_table_file(path)
                .with_context(|| format!("Failed to load locale table: {}", path.display()))?;
        }
        let config = builder.build()?;
        let editor = Editor::with_config(config)?;

        let format = match global.format {
            Some(format) => format,
            None => cli_config.output.default_format.parse()?,
        };

        log::info!(
            "Editing with locale {} (consider spaces: {})",
            editor.config().locale(),
            editor.consider_spaces()
        );

        Ok(Self {
            editor,
            format,
            pretty_json: cli_config.output.pretty_json,
        })
    }

    /// The configured editor
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Apply `command` to the field and write the result to stdout
    pub fn run(&self, field: &FieldArgs, command: &Command) -> CliResult<()> {
        let (value, caret) = field.load()?;
        log::debug!(
            "Applying {} at caret {caret} to {} chars",
            command.name(),
            value.chars().count()
        );

        let outcome = self.editor.apply(&value, caret, command);
        let state = outcome.field_state(&value, caret);

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(std::io::stdout(), self.pretty_json))
            }
        };
        formatter.format_outcome(command, &outcome, &state)?;
        formatter.finish()
    }
}
