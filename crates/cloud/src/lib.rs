//! Object-storage providers for binary assets.
//!
//! [`StorageProvider`] is the seam between handlers and the storage
//! backend. Two implementations exist: [`local::LocalStorage`] writes under
//! a media root on disk (served by the API under `/media`), and
//! [`s3::S3Storage`] targets an S3 bucket. Both return a retrievable public
//! URL for every stored object.

pub mod local;
pub mod s3;

use async_trait::async_trait;

/// A stored object's storage key and public URL.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Backend-relative key, e.g. `uploads/3f2a….png`.
    pub key: String,
    /// Publicly retrievable URL for the object.
    pub url: String,
}

/// Errors raised by storage providers.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Local filesystem I/O failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// S3 request failure.
    #[error("S3 error: {0}")]
    S3(String),
}

/// Abstraction over the object-storage backend.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Store `bytes` under `key` with the given content type, returning the
    /// object's public URL.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Delete the object under `key`. Missing objects are not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// The public URL an object stored under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}

/// Build a fresh storage key for an upload: `{prefix}/{uuid}.{ext}`.
pub fn object_key(prefix: &str, extension: &str) -> String {
    format!("{prefix}/{}.{extension}", uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key_shape() {
        let key = object_key("uploads", "png");
        assert!(key.starts_with("uploads/"));
        assert!(key.ends_with(".png"));
        // prefix + slash + uuid + dot + ext
        assert_eq!(key.len(), "uploads/".len() + 36 + ".png".len());
    }

    #[test]
    fn test_object_keys_are_unique() {
        assert_ne!(object_key("u", "png"), object_key("u", "png"));
    }
}
