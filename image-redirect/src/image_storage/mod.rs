//! Object storage access for Open Graph images
mod error;
mod key;
mod s3;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use error::{BucketError, BucketResult};
pub use key::{ImageKey, IMAGE_KEY_PREFIX};
pub use s3::S3ImageStore;

/// Presigned URL with expiration information
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL for GET operations
    pub url: String,
    /// UTC timestamp when the URL expires
    pub expires_at: DateTime<Utc>,
}

/// Metadata of a stored image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// MIME type recorded at upload
    pub content_type: Option<String>,
    /// Size in bytes
    pub content_length: Option<i64>,
    /// Time of the last upload
    pub last_modified: Option<DateTime<Utc>>,
    /// Entity tag of the stored content
    pub e_tag: Option<String>,
}

/// Storage backend able to look up images and sign read URLs for them
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Fetches the metadata of the object stored under `key`
    ///
    /// Used as an existence check before handing out a signed URL.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ObjectNotFound` if nothing is stored under `key`
    /// Returns `BucketError::AccessDenied` if the bucket refuses access
    /// Returns `BucketError::UpstreamError` for 5xx errors from the store
    async fn fetch_metadata(&self, key: &ImageKey) -> BucketResult<ObjectMetadata>;

    /// Generates a time-limited presigned URL granting read access to `key`
    ///
    /// # Errors
    ///
    /// Returns `BucketError::ConfigError` if the expiry is out of range
    /// Returns `BucketError::S3Error` if signing fails
    async fn presigned_get_url(&self, key: &ImageKey) -> BucketResult<PresignedUrl>;
}
