//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Session file could not be used
    SessionError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SessionError(msg) => write!(f, "Session error: {msg}"),
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
        let error = CliError::FileNotFound("chapter1.xhtml".to_string());
        assert_eq!(error.to_string(), "File not found: chapter1.xhtml");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_session_error_display() {
        let error = CliError::SessionError("corrupt snapshot".to_string());
        assert_eq!(error.to_string(), "Session error: corrupt snapshot");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("книга.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
        assert!(debug_str.contains("книга.txt"));
    }

    #[test]
    fn test_cli_error_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::SessionError("stale".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(err.to_string(), "Session error: stale");
    }
}
