//! Error types for the explorer core and its collaborators.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the indented tree parser.
///
/// Malformed lines never produce an error; they are skipped. The only
/// failure is input that is not text at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("structure listing is not valid UTF-8 text (valid up to byte {valid_up_to})")]
    NotText { valid_up_to: usize },
}

/// Errors surfaced by the CLI, configuration and collaborator layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to fetch repository structure: {0}")]
    Fetch(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Fetch(err.to_string())
    }
}
