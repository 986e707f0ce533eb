//! Error types for the dice session engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dice session operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur while setting up, playing or saving a session.
#[derive(Debug, Error)]
pub enum DiceError {
    /// Rejected user input (empty name, unknown level, bad round count).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The channel a roll is acquired through failed.
    #[error("error rolling dice: {0}")]
    InvalidRoll(String),

    /// Reading or writing the result log failed.
    #[error("error accessing {}: {message}", path.display())]
    FileOperation {
        /// The file that was being read or written.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

impl DiceError {
    /// Build a `FileOperation` error for `path` from any displayable cause.
    pub fn file(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self::FileOperation {
            path: path.into(),
            message: cause.to_string(),
        }
    }
}
