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
    /// Malformed corpus file
    ParseError {
        /// File being read
        path: String,
        /// 1-based line number, when known
        line: Option<usize>,
        /// What was wrong
        message: String,
    },
    /// Evaluation error from core
    EvaluationError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ParseError {
                path,
                line: Some(line),
                message,
            } => write!(f, "Parse error in {path} at line {line}: {message}"),
            CliError::ParseError {
                path,
                line: None,
                message,
            } => write!(f, "Parse error in {path}: {message}"),
            CliError::EvaluationError(msg) => write!(f, "Evaluation error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
