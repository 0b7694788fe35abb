//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Neither --text nor --input was given
    MissingText,
    /// Configuration error
    ConfigError(String),
    /// Unknown output format name
    UnknownFormat(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::MissingText => write!(f, "No text given: use --text or --input"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownFormat(name) => write!(f, "Unknown output format: {name}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.txt".to_string());
        assert_eq!(error.to_string(), "File not found: test.txt");
    }

    #[test]
    fn test_missing_text_error_display() {
        assert_eq!(
            CliError::MissingText.to_string(),
            "No text given: use --text or --input"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_unknown_format_display() {
        let error = CliError::UnknownFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("ファイル/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: ファイル/test 文件.txt");
    }

    #[test]
    fn test_cli_result_wraps_cli_error() {
        let failure: CliResult<()> = Err(CliError::MissingText.into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
