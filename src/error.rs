//! Error types for the Sentira library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SentiraError`] enum. The error taxonomy mirrors how failures propagate:
//! input errors are recovered at the service boundary, while artifact and
//! training errors are terminal conditions for the caller — neither stems
//! from a transient fault, so nothing in this crate retries.
//!
//! # Examples
//!
//! ```
//! use sentira::error::{Result, SentiraError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SentiraError::input("no text provided"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

use crate::model::ArtifactError;

/// The main error type for Sentira operations.
#[derive(Error, Debug)]
pub enum SentiraError {
    /// I/O errors (corpus files, artifact files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid caller-supplied input, recovered at the service boundary
    #[error("Input error: {0}")]
    Input(String),

    /// Persisted model artifact is missing, corrupt, or incompatible
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// Training run failures (bad corpus, diverged optimization, etc.)
    #[error("Training error: {0}")]
    Training(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SentiraError.
pub type Result<T> = std::result::Result<T, SentiraError>;

impl SentiraError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SentiraError::Analysis(msg.into())
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        SentiraError::Input(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        SentiraError::Training(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SentiraError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SentiraError::Other(format!("Invalid argument: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SentiraError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = SentiraError::input("no text provided");
        assert_eq!(error.to_string(), "Input error: no text provided");

        let error = SentiraError::training("Test training error");
        assert_eq!(error.to_string(), "Training error: Test training error");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let sentira_error = SentiraError::from(io_error);

        match sentira_error {
            SentiraError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
