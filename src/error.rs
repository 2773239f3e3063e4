//! Error types for the precis summarizer.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for precis operations.
#[derive(Error, Debug)]
pub enum PrecisError {
    /// A caller-supplied argument is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Stop-word data could not be loaded.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// The sentence or word splitter produced unusable output.
    #[error("Tokenization failure: {0}")]
    TokenizationFailure(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for precis operations.
pub type Result<T> = std::result::Result<T, PrecisError>;

impl From<toml::de::Error> for PrecisError {
    fn from(err: toml::de::Error) -> Self {
        PrecisError::Config(err.to_string())
    }
}

impl PrecisError {
    /// Returns true for errors caused by the caller's arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PrecisError::InvalidArgument(_))
    }

    /// Returns true when a linguistic resource was missing.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, PrecisError::ResourceUnavailable(_))
    }
}
