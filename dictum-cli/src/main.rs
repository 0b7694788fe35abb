//! Command-line front-end for dictation editing commands

use anyhow::Result;
use clap::Parser;
use dictum_cli::commands::edit::EditSession;
use dictum_cli::commands::{Commands, GlobalArgs};

/// Apply dictation editing commands to text from the command line
#[derive(Debug, Parser)]
#[command(name = "dictum", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.global);

    if let Err(e) = run(&cli) {
        log::debug!("Command failed: {e:?}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => subcommand.execute(),
        command => match command.edit_request() {
            Some((field, request)) => EditSession::new(&cli.global)?.run(field, &request),
            None => Ok(()),
        },
    }
}

/// Initialize logging based on verbosity level
fn init_logging(global: &GlobalArgs) {
    if global.quiet {
        return;
    }

    let log_level = match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}
