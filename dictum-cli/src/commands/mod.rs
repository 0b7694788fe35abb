//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use dictum_api::Command;
use dictum_core::language::builtin_table;
use std::path::PathBuf;

pub mod edit;
pub mod validate;

pub use edit::FieldArgs;

/// Options shared by every command
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Locale of the text, e.g. en-US or ja-JP (overrides the config file)
    #[arg(short, long, global = true, env = "DICTUM_LOCALE")]
    pub locale: Option<String>,

    /// Configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON object with the command, its outcome and the resulting field
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::error::CliError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(crate::error::CliError::UnknownFormat(name.to_string())),
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace the closest phrase left of the caret (omit --with to delete)
    Replace(edit::ReplaceArgs),

    /// Insert a phrase before the closest anchor phrase left of the caret
    InsertBefore(edit::InsertBeforeArgs),

    /// Select between two phrases left of the caret
    Select(edit::SelectArgs),

    /// Move the caret to the start of the next sentence
    NextSentence(edit::NavArgs),

    /// Move the caret to the start of the current sentence
    PrevSentence(edit::NavArgs),

    /// Pad text with spaces to fit at the caret
    Spacing(edit::CommitArgs),

    /// Capitalize text to fit at the caret
    Capitalize(edit::CommitArgs),

    /// Format text for committing at the caret
    Commit(edit::CommitArgs),

    /// Validate a locale table file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// The field and editing command this CLI command stands for
    ///
    /// `None` for commands that do not edit text.
    pub fn edit_request(&self) -> Option<(&FieldArgs, Command)> {
        let request = match self {
            Commands::Replace(args) => (
                &args.field,
                match &args.with {
                    Some(insert) => Command::Replace {
                        delete: args.phrase.clone(),
                        insert: insert.clone(),
                    },
                    None => Command::Delete {
                        phrase: args.phrase.clone(),
                    },
                },
            ),
            Commands::InsertBefore(args) => (
                &args.field,
                Command::InsertBefore {
                    insert: args.phrase.clone(),
                    before: args.before.clone(),
                },
            ),
            Commands::Select(args) => (
                &args.field,
                Command::Select {
                    start: args.from.clone(),
                    end: args.to.clone(),
                },
            ),
            Commands::NextSentence(args) => (&args.field, Command::NextSentence),
            Commands::PrevSentence(args) => (&args.field, Command::PrevSentence),
            Commands::Spacing(args) => (
                &args.field,
                Command::Spacing {
                    text: args.commit_text.clone(),
                },
            ),
            Commands::Capitalize(args) => (
                &args.field,
                Command::Capitalize {
                    text: args.commit_text.clone(),
                },
            ),
            Commands::Commit(args) => (
                &args.field,
                Command::Commit {
                    text: args.commit_text.clone(),
                },
            ),
            Commands::Validate(_) | Commands::List { .. } => return None,
        };
        Some(request)
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in locales and their spacing behaviour
    Locales,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Locales => {
                println!("Built-in locales:");
                for entry in &builtin_table().locales {
                    let spacing = if entry.consider_spaces {
                        "space-delimited"
                    } else {
                        "no spaces"
                    };
                    println!("  {:<4} {:<12} {spacing}", entry.code, entry.name);
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text  - Plain text");
                println!("  json  - JSON with command, outcome and resulting field");
            }
        }
        Ok(())
    }
}
