//! Error types for vitrine-contact.

use thiserror::Error;

/// Result type alias for vitrine-contact operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while appending to the contact log.
///
/// Read-side failures never appear here: an unreadable or unparseable log
/// file is recovered as empty rather than reported.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The submission failed validation and was not written
    #[error("Invalid submission: {0}")]
    Invalid(#[from] vitrine_core::Error),

    /// I/O error writing the log file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error building the log file
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns whether this error was caused by bad caller input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Invalid(_))
    }
}
