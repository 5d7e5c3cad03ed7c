//! Error types for the Shabda library.
//!
//! The index itself never fails: a lookup with no match is an empty result.
//! [`ShabdaError`] covers the edges around it, namely building the analysis
//! pipeline from configuration, reading documents and rendering results.
//!
//! # Examples
//!
//! ```
//! use shabda::error::{Result, ShabdaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShabdaError::config("at least one file extension is required"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Shabda operations.
#[derive(Error, Debug)]
pub enum ShabdaError {
    /// I/O errors (file operations, terminal input/output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (invalid filter patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failures reported by a document text provider
    #[error("Source error: {0}")]
    Source(String),
}

/// Result type alias for operations that may fail with ShabdaError.
pub type Result<T> = std::result::Result<T, ShabdaError>;

impl ShabdaError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShabdaError::Config(msg.into())
    }

    /// Create a new source error.
    pub fn source<S: Into<String>>(msg: S) -> Self {
        ShabdaError::Source(msg.into())
    }
}

impl From<regex::Error> for ShabdaError {
    fn from(err: regex::Error) -> Self {
        ShabdaError::Analysis(err.to_string())
    }
}
