//! Error types for the anonymous board.

use thiserror::Error;

/// Common error type for the anonymous board.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
