//! Error handling for the `famille` library.
//!
//! The relationship resolver and the eligible relative filter never fail;
//! errors only arise at the edges (loading a roster, parsing form input,
//! reading configuration).

pub mod util;

use std::io;
use std::path::PathBuf;

use crate::models::PersonId;

/// Specialized error type for the `famille` library
#[derive(Debug, thiserror::Error)]
pub enum FamilleError {
    /// Error opening or reading a file
    #[error("IO error on {path}: {source}")]
    PathError {
        /// File the operation was working on
        path: PathBuf,
        /// Underlying IO failure
        #[source]
        source: io::Error,
    },

    /// Malformed JSON payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A form field holds a value that cannot be interpreted
    #[error("Invalid value for field '{field}': {value:?}")]
    InvalidField {
        /// Name of the offending form field
        field: &'static str,
        /// The raw value that was rejected
        value: String,
    },

    /// A referenced person is not part of the roster
    #[error("Person {0} not found in roster")]
    PersonNotFound(PersonId),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl FamilleError {
    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Attach a path to an IO error
    pub fn with_path(source: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::PathError {
            path: path.into(),
            source,
        }
    }
}

/// Result type for `famille` operations
pub type Result<T> = std::result::Result<T, FamilleError>;
