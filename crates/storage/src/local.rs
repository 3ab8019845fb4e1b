//! Local-filesystem storage provider.
//!
//! Writes under an upload root that the HTTP layer (or a reverse proxy)
//! serves statically. Suitable for development and integration tests.

use std::path::PathBuf;

use crate::{ObjectStorage, StorageError};

/// Stores objects as plain files under `root`, with URLs composed from
/// `public_base_url`.
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, StorageError> {
        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), "Stored image locally");
        Ok(format!(
            "{}/{key}",
            self.public_base_url.trim_end_matches('/')
        ))
    }
}
