//! Error types for vitrine-api.

use thiserror::Error;

/// Result type alias for vitrine-api operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vitrine-api.
///
/// Request-level failures are handled in the route handlers and never reach
/// this type; these variants cover configuration and server lifecycle.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vitrine-core
    #[error("Core error: {0}")]
    Core(#[from] vitrine_core::Error),

    /// Error from vitrine-content
    #[error("Content error: {0}")]
    Content(#[from] vitrine_content::Error),

    /// Error from vitrine-contact
    #[error("Contact error: {0}")]
    Contact(#[from] vitrine_contact::Error),

    /// Configuration file error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error (bind, listen)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
