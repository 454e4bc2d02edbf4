//! Error types for the Xiphos library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`XiphosError`] enum.
//!
//! # Examples
//!
//! ```
//! use xiphos::error::{Result, XiphosError};
//!
//! fn parse_algorithm(name: &str) -> Result<()> {
//!     Err(XiphosError::invalid_algorithm(name, &["levenshtein"]))
//! }
//!
//! match parse_algorithm("soundex") {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Xiphos operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum XiphosError {
    /// Unknown distance algorithm selector.
    ///
    /// Deterministic: the same selector will always fail, so callers should
    /// surface this to the client rather than retry.
    #[error("Unsupported algorithm '{name}'. Available: {supported}")]
    InvalidAlgorithm {
        /// The selector that failed to parse.
        name: String,
        /// Comma-separated list of supported algorithm names.
        supported: String,
    },

    /// Invalid input (missing corpus, malformed request, etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors (corpus file loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

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

/// Result type alias for operations that may fail with XiphosError.
pub type Result<T> = std::result::Result<T, XiphosError>;

impl XiphosError {
    /// Create a new invalid algorithm error from a rejected selector and the
    /// set of supported names.
    pub fn invalid_algorithm<S: Into<String>>(name: S, supported: &[&str]) -> Self {
        XiphosError::InvalidAlgorithm {
            name: name.into(),
            supported: supported.join(", "),
        }
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        XiphosError::InvalidInput(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XiphosError::Other(msg.into())
    }
}
