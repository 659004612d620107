//! Contact submission types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One contact-form submission, as received from a caller.
///
/// Validation requires all three fields to be non-empty. No trimming is
/// applied here; interactive frontends trim before building the request,
/// while the server accepts whatever it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
}

impl ContactRequest {
    /// Creates a new contact request.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks that every required field is present and non-empty.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.is_empty() {
                return Err(Error::validation_field(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

/// A validated, timestamped contact submission as persisted in the log.
///
/// Immutable once written; the application never reads it back except to
/// extend the log. The timestamp field is serialized as `ts` to stay
/// compatible with existing log files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email address
    pub email: String,
    /// Message body
    pub message: String,
    /// Server-generated submission time, RFC 3339
    pub ts: String,
}

impl ContactMessage {
    /// Stamps a request with the current time.
    pub fn from_request(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            message: request.message,
            ts: Utc::now().to_rfc3339(),
        }
    }
}
