//! Error types for the textlens library.
//!
//! The analysis functions themselves never fail: degenerate input produces
//! zero or empty results. Errors only arise on the surfaces around them,
//! such as configuration loading and the command line tool.
//!
//! # Examples
//!
//! ```
//! use textlens::error::{TextLensError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextLensError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textlens operations.
#[derive(Error, Debug)]
pub enum TextLensError {
    /// I/O errors (reading input files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid values, unreadable config files)
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument passed to a command
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextLensError.
pub type Result<T> = std::result::Result<T, TextLensError>;

impl TextLensError {
    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TextLensError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextLensError::InvalidArgument(msg.into())
    }
}
