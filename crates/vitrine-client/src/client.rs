//! The site HTTP client.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use vitrine_core::{ContactRequest, ContentKey};

use crate::error::{Error, Result};

/// Hook invoked when a content fetch fails.
///
/// The default hook logs at `warn`. Installing a custom hook is how callers
/// observe swallowed failures without changing the never-break-the-page
/// policy.
pub type ErrorHook = Arc<dyn Fn(ContentKey, &Error) + Send + Sync>;

/// Outcome of a contact submission, as seen by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted and recorded the submission.
    Accepted {
        /// Server-provided acknowledgement text
        message: String,
    },
    /// The server rejected the submission.
    Rejected {
        /// HTTP status code
        status: u16,
        /// Server-provided rejection text
        message: String,
    },
}

/// HTTP client for a Vitrine site.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: String,
    error_hook: ErrorHook,
}

impl SiteClient {
    /// Creates a client for the given site base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            error_hook: Arc::new(|key, error| {
                tracing::warn!(resource = %key, %error, "content fetch failed");
            }),
        }
    }

    /// Replaces the fetch-failure hook.
    pub fn with_error_hook(mut self, hook: ErrorHook) -> Self {
        self.error_hook = hook;
        self
    }

    /// The site base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches one content document.
    ///
    /// Failures are swallowed: the error hook is invoked and `None` is
    /// returned, leaving the caller's page region untouched.
    pub async fn fetch_content(&self, key: ContentKey) -> Option<Value> {
        match self.try_fetch(key).await {
            Ok(document) => Some(document),
            Err(error) => {
                (self.error_hook)(key, &error);
                None
            }
        }
    }

    async fn try_fetch(&self, key: ContentKey) -> Result<Value> {
        let url = self.url(&format!("data/{}", key.file_name()));
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Submits a contact request.
    ///
    /// Server acceptance and rejection are both `Ok` outcomes carrying the
    /// server's message; only transport failures are errors. A body that is
    /// not the expected JSON is tolerated and replaced with fallback text,
    /// as the site frontend does.
    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<SubmitOutcome> {
        let response = self
            .http
            .post(self.url("api/contact"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let reply: ContactReply = response.json().await.unwrap_or_default();

        if status.is_success() {
            Ok(SubmitOutcome::Accepted {
                message: reply
                    .message
                    .unwrap_or_else(|| "Message sent — thank you!".to_string()),
            })
        } else {
            Ok(SubmitOutcome::Rejected {
                status: status.as_u16(),
                message: reply
                    .message
                    .unwrap_or_else(|| "Failed to send message.".to_string()),
            })
        }
    }
}

impl std::fmt::Debug for SiteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Contact endpoint reply body. Only the message is used; the shape is not
/// a contract the client enforces.
#[derive(Debug, Default, Deserialize)]
struct ContactReply {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = SiteClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
        assert_eq!(
            client.url("/data/about.json"),
            "http://127.0.0.1:3000/data/about.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_content_unreachable_host_swallows_and_hooks() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&hits);
        // Port 1 is never listening.
        let client =
            SiteClient::new("http://127.0.0.1:1").with_error_hook(Arc::new(move |key, _error| {
                assert_eq!(key, ContentKey::About);
                seen.fetch_add(1, Ordering::SeqCst);
            }));

        assert!(client.fetch_content(ContentKey::About).await.is_none());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_contact_unreachable_host_is_an_error() {
        let client = SiteClient::new("http://127.0.0.1:1");
        let request = ContactRequest::new("Ada", "a@x.com", "hi");
        assert!(client.submit_contact(&request).await.is_err());
    }
}
