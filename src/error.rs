//! Error types for the memory-lab library

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed construction or tuning argument
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Data that fails binary/bipolar validation or length matching
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}
