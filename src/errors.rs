//! Error types for textgraph
//!
//! The engine itself is total over well-formed inputs: word lookups that miss
//! report through tagged outcome types, not errors. The error enum covers the
//! edges of the crate: reading input text from disk, caller-side
//! configuration checks, and serializing results.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextGraphError>;

/// Main error type for textgraph
#[derive(Error, Debug, Clone)]
pub enum TextGraphError {
    /// Input text could not be read; the graph is left in its prior state
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TextGraphError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for TextGraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
