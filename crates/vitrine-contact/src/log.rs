//! The contact submission log.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use vitrine_core::{ContactMessage, ContactRequest};

use crate::error::Result;

/// Append-only JSON-array log of contact submissions.
///
/// Each append validates the submission, stamps it with the current time,
/// and rewrites the whole array pretty-printed. The read-modify-write cycle
/// is serialized through an internal mutex, so concurrent appends within one
/// process cannot lose entries. Cross-process writers are not coordinated;
/// see DESIGN.md.
///
/// A missing log file is an empty log. An unreadable or unparseable log file
/// is also treated as empty: the failure is logged at `warn` and the next
/// append starts a fresh array.
#[derive(Debug)]
pub struct ContactLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ContactLog {
    /// Creates a log backed by the given file path.
    ///
    /// The file and its parent directories are created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current log contents, oldest first.
    pub async fn entries(&self) -> Vec<ContactMessage> {
        self.read_entries().await
    }

    /// Validates, timestamps, and appends one submission.
    ///
    /// Returns the persisted message, including its server-generated
    /// timestamp. Nothing is written when validation fails.
    pub async fn append(&self, request: ContactRequest) -> Result<ContactMessage> {
        request.validate()?;

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut entries = self.read_entries().await;
        let message = ContactMessage::from_request(request);
        entries.push(message.clone());

        let json = serde_json::to_vec_pretty(&entries)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!(
            path = %self.path.display(),
            total = entries.len(),
            "contact message appended"
        );
        Ok(message)
    }

    async fn read_entries(&self) -> Vec<ContactMessage> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "contact log unreadable, treating as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "contact log unparseable, treating as empty"
                );
                Vec::new()
            }
        }
    }
}
