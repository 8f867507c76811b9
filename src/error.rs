//! Error types for the BirdApp client

use thiserror::Error;

/// Result type for BirdApp client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the client view-models.
///
/// None of these are fatal to a page; every variant is recoverable by
/// user retry. `Validation` is raised before any network call is issued,
/// `Remote` carries the server's failure message with page state left
/// intact for retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Blank or malformed form field; submission aborted, no request sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Well-formed server response carrying a failure status
    #[error("Server error: {0}")]
    Remote(String),

    /// Transport-level failure (connection refused, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::Parse(e.to_string())
        } else {
            Error::Network(e.to_string())
        }
    }
}
