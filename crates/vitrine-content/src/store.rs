//! Flat-file content document store.

use std::path::{Path, PathBuf};

use serde_json::Value;
use vitrine_core::ContentKey;

use crate::error::{Error, Result};

/// Read-only access to the site's flat JSON content documents.
///
/// The store holds only the data directory path; every [`load`] reads the
/// backing file fresh, so document edits are picked up without a restart.
///
/// [`load`]: ContentStore::load
#[derive(Debug, Clone)]
pub struct ContentStore {
    data_dir: PathBuf,
}

impl ContentStore {
    /// Creates a store over the given data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the content documents.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The backing file path for a content key.
    pub fn document_path(&self, key: ContentKey) -> PathBuf {
        self.data_dir.join(key.file_name())
    }

    /// Loads a content document verbatim.
    ///
    /// Any failure (missing file, unreadable file, invalid JSON) is reported
    /// as [`Error::Unavailable`] for the resource; the cause is logged but
    /// never surfaced to callers.
    pub async fn load(&self, key: ContentKey) -> Result<Value> {
        let path = self.document_path(key);

        let bytes = tokio::fs::read(&path).await.map_err(|error| {
            tracing::warn!(
                resource = %key,
                path = %path.display(),
                %error,
                "content document unreadable"
            );
            Error::unavailable(key.as_str(), error)
        })?;

        serde_json::from_slice(&bytes).map_err(|error| {
            tracing::warn!(
                resource = %key,
                path = %path.display(),
                %error,
                "content document is not valid JSON"
            );
            Error::unavailable(key.as_str(), error)
        })
    }
}
