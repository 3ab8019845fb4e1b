//! Object storage for complaint images.
//!
//! A single [`ObjectStorage`] trait with two providers: S3-compatible
//! buckets for production and the local filesystem for development and
//! tests. Keys are namespaced by the owning citizen
//! (`{user_id}/{token}.{ext}`), and a successful upload yields the
//! publicly retrievable URL that gets persisted on the complaint row.

mod local;
mod s3;

pub use local::LocalStorage;
pub use s3::S3Storage;

/// Errors from an object storage provider.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem IO failed (local provider).
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote store rejected or failed the upload.
    #[error("Upload failed: {0}")]
    Upload(String),
}

/// An object store that can persist an image and hand back a public URL.
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under `key` and return the public URL.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
