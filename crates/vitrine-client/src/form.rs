//! Contact form state, mirroring the site frontend's submit flow.

use vitrine_core::ContactRequest;

use crate::client::{SiteClient, SubmitOutcome};

/// Inline contact form: the three field values plus a status line.
///
/// `submit` drives one attempt end to end. Field values are cleared only on
/// a successful submission; a rejected or failed attempt keeps them so the
/// user can retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name field
    pub name: String,
    /// Sender email field
    pub email: String,
    /// Message body field
    pub message: String,
    status: Option<String>,
}

impl ContactForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills all three fields at once.
    pub fn fill(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.name = name.into();
        self.email = email.into();
        self.message = message.into();
    }

    /// The current inline status line, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Trims and validates the current field values.
    ///
    /// Returns the request to send, or `None` if any field is empty after
    /// trimming. Trimming matches the frontend; the server itself does not
    /// trim.
    fn validated(&self) -> Option<ContactRequest> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return None;
        }
        Some(ContactRequest::new(name, email, message))
    }

    /// Drives one submission attempt against the site.
    pub async fn submit(&mut self, client: &SiteClient) {
        self.status = Some("Sending...".to_string());

        let Some(request) = self.validated() else {
            self.status = Some("Please fill all fields.".to_string());
            return;
        };

        match client.submit_contact(&request).await {
            Ok(SubmitOutcome::Accepted { message }) => {
                self.status = Some(message);
                self.reset_fields();
            }
            Ok(SubmitOutcome::Rejected { message, .. }) => {
                self.status = Some(message);
            }
            Err(error) => {
                tracing::warn!(%error, "contact submission failed");
                self.status = Some("Network error — try again later.".to_string());
            }
        }
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
