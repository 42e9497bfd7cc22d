//! Error handling module for the bqlt CLI.
//!
//! Errors are structured with `thiserror`; lexical failures keep the
//! underlying [`LexError`] as their source.

use std::path::PathBuf;

use bql_lex::LexError;
use thiserror::Error;

/// Main error type for the bqlt CLI application.
#[derive(Error, Debug)]
pub enum BqltError {
    /// Configuration could not be found, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Input or command arguments were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A source file contains a lexical error.
    #[error("{}: {source}", path.display())]
    Lex {
        /// File that failed to lex.
        path: PathBuf,
        /// The lexical error.
        #[source]
        source: LexError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using BqltError.
pub type Result<T> = std::result::Result<T, BqltError>;
