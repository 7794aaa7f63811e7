//! Error types for docsearch
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for docsearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for docsearch
#[derive(Debug, Error)]
pub enum Error {
    /// The index was queried before it was built
    #[error("Search index queried before it was built")]
    IndexNotBuilt,

    /// The engine returned a reference that has no url mapping
    #[error("Search engine returned unknown reference: {0}")]
    UnknownReference(String),

    /// Two documents in one corpus share a title
    #[error("Duplicate document title: {0}")]
    DuplicateTitle(String),

    /// A document failed validation
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Configuration could not be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (corpus or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl Error {
    /// Whether the error comes from misuse of the API rather than bad input
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Error::IndexNotBuilt | Error::UnknownReference(_))
    }
}
