//! Validate command implementation

use anyhow::Result;
use clap::Args;
use dictum_core::language::load_table_file;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the locale table to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub locale_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating locale table: {}",
            self.locale_config.display()
        );

        match load_table_file(&self.locale_config) {
            Ok(table) => {
                let unspaced = table
                    .locales
                    .iter()
                    .filter(|entry| !entry.consider_spaces)
                    .count();
                println!("✓ Locale table is valid!");
                if !table.metadata.name.is_empty() {
                    println!("  Name: {}", table.metadata.name);
                }
                println!("  Locales: {}", table.locales.len());
                println!("  Written without spaces: {unspaced}");
                Ok(())
            }
            Err(e) => {
                println!("✗ Locale table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
