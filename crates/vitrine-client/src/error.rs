//! Error types for vitrine-client.

use thiserror::Error;

/// Result type alias for vitrine-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vitrine-client.
///
/// Content-fetch failures never surface to callers as errors; they are
/// reported through the client's error hook and collapse to `None`. These
/// variants appear only where the caller asked for a definite answer, such
/// as a contact submission.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
