//! S3 storage provider.
//!
//! Credentials and region come from the standard AWS environment (env vars,
//! profile, instance metadata). The public URL base is configured
//! separately so a CDN or bucket website endpoint can front the bucket.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;

use crate::{StorageError, StorageProvider, StoredObject};

/// Stores objects in an S3 bucket.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base: String,
}

impl S3Storage {
    /// Create a provider from the ambient AWS configuration.
    ///
    /// `public_base` is the URL prefix objects are served from, e.g.
    /// `https://assets.example.com`.
    pub async fn from_env(bucket: impl Into<String>, public_base: impl Into<String>) -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: bucket.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StorageProvider for S3Storage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;

        tracing::debug!(key, bucket = %self.bucket, "Stored object in S3");

        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::S3(e.to_string()))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base)
    }
}
