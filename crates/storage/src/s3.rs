//! S3-compatible storage provider.

use aws_sdk_s3::primitives::ByteStream;

use crate::{ObjectStorage, StorageError};

/// Stores objects in an S3 (or S3-compatible) bucket.
///
/// `public_base_url` is the bucket's public serving root, e.g.
/// `https://bucket.s3.amazonaws.com` or a CDN in front of it.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Storage {
    /// Build a provider from the ambient AWS configuration (environment
    /// credentials, profile, or instance role).
    pub async fn from_env(bucket: String, public_base_url: String) -> Self {
        let config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket,
            public_base_url,
        }
    }
}

#[async_trait::async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        tracing::debug!(bucket = %self.bucket, key, "Stored image in S3");
        Ok(format!(
            "{}/{key}",
            self.public_base_url.trim_end_matches('/')
        ))
    }
}
