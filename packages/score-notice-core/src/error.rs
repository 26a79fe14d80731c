//! Notice pipeline error types.

use thiserror::Error;

/// Errors surfaced by the notice core.
///
/// Malformed rows, missing columns, unknown placeholders and removal of an
/// absent record are not errors and never produce one of these.
#[derive(Error, Debug)]
pub enum NoticeError {
    /// Category tag not recognized, or category not registered
    #[error("Unknown category '{tag}'")]
    UnknownCategory { tag: String },

    /// Schema failed validation at registration
    #[error("Invalid schema for category '{category}': {message}")]
    InvalidSchema { category: String, message: String },

    /// Schema already registered for the category
    #[error("Schema for category '{category}' already registered")]
    SchemaAlreadyRegistered { category: String },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Clipboard sink rejected the write
    #[error("Clipboard write failed: {0}")]
    ClipboardFailed(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoticeError>;
