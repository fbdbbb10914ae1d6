//! Error types for settings and CLI operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Main error type for all pipeline operations
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stored secret could not be decoded
    #[error("Corrupt settings value for '{key}': {reason}")]
    CorruptSettings {
        /// Preference key holding the bad value
        key: String,
        /// Why decoding failed
        reason: String,
    },

    /// Store construction errors
    #[error("Configuration error: {reason}")]
    Config {
        /// Reason for the error
        reason: String,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl PipelineError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PipelineError::CorruptSettings { key, .. } => vec![
                format!("Re-enter the credential and save it again to overwrite '{key}'"),
                "Or remove the value from the preferences file to fall back to an empty secret"
                    .to_string(),
            ],
            PipelineError::Json(_) => {
                vec!["The preferences file is not valid JSON; fix or delete it".to_string()]
            }
            PipelineError::Toml(_) => vec!["Check the project manifest syntax".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
