//! Error types for the textprep library.
//!
//! All errors are represented by the [`TextprepError`] enum. Option parsing
//! errors are raised before any text is touched, so a failed call never
//! leaves a partially transformed result behind.
//!
//! # Examples
//!
//! ```
//! use textprep::error::{Result, TextprepError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextprepError::invalid_option("digits must be none, remove or convert"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textprep operations.
#[derive(Error, Debug)]
pub enum TextprepError {
    /// An enum-valued preprocessing option received an unrecognized value.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// The normalization mode is not one of `lemmatize` or `stem`.
    #[error("Unsupported normalization mode: {0}")]
    UnsupportedNormalizationMode(String),

    /// A capability was called with input outside its domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration that could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (configuration files, CLI input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with TextprepError.
pub type Result<T> = std::result::Result<T, TextprepError>;

impl TextprepError {
    /// Create a new invalid option error.
    pub fn invalid_option<S: Into<String>>(msg: S) -> Self {
        TextprepError::InvalidOption(msg.into())
    }

    /// Create a new unsupported normalization mode error.
    pub fn unsupported_mode<S: Into<String>>(msg: S) -> Self {
        TextprepError::UnsupportedNormalizationMode(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextprepError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TextprepError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextprepError::Config(msg.into())
    }
}
