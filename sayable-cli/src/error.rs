//! Error handling for the CLI application

use std::fmt;

/// Driver-specific failures
#[derive(Debug)]
pub enum CliError {
    /// No input matched the given files or patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file could not be parsed or failed validation
    ConfigError(String),
    /// Model snapshot could not be loaded
    ModelError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ModelError(msg) => write!(f, "Model error: {msg}"),
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
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("notes.txt".to_string()).to_string(),
            "File not found: notes.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[invalid".to_string()).to_string(),
            "Invalid file pattern: [invalid"
        );
        assert_eq!(
            CliError::ConfigError("bad tag".to_string()).to_string(),
            "Configuration error: bad tag"
        );
        assert_eq!(
            CliError::ModelError("no labels".to_string()).to_string(),
            "Model error: no labels"
        );
    }

    #[test]
    fn test_converts_into_anyhow() {
        let result: CliResult<()> = Err(CliError::ModelError("truncated".to_string()).into());
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
        assert_eq!(error.to_string(), "Model error: truncated");
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("メモ/test 文件.txt".to_string());
        assert_eq!(error.to_string(), "File not found: メモ/test 文件.txt");
    }
}
