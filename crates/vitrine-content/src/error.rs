//! Error types for vitrine-content.

use thiserror::Error;

/// Result type alias for vitrine-content operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vitrine-content.
///
/// A missing, unreadable, or unparseable document all collapse into
/// [`Error::Unavailable`]: the HTTP surface reports one fixed message per
/// resource and keeps the underlying cause out of responses.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The backing document is missing or unreadable.
    #[error("{resource} data not available")]
    Unavailable {
        /// Resource name, e.g. `projects`
        resource: String,
        /// Underlying I/O or parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Creates an `Unavailable` error for the given resource.
    pub fn unavailable<E>(resource: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Unavailable {
            resource: resource.into(),
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display_is_the_wire_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::unavailable("projects", io);
        assert_eq!(err.to_string(), "projects data not available");
    }

    #[test]
    fn test_unavailable_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::unavailable("services", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
