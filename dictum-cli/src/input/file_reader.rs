//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text; `-` reads standard input
    pub fn read_text(path: &Path) -> Result<String> {
        if path.as_os_str() == "-" {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            return Ok(content);
        }

        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a field value from a file, dropping one trailing newline
    ///
    /// Editors and shells append a final newline that is not part of the
    /// text being edited.
    pub fn read_field(path: &Path) -> Result<String> {
        let mut content = Self::read_text(path)?;
        if content.ends_with('\n') {
            content.pop();
            if content.ends_with('\r') {
                content.pop();
            }
        }
        Ok(content)
    }
}
