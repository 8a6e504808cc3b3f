use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{
    error::{DisplayErrorContext, SdkError},
    operation::head_object::{HeadObjectError, HeadObjectOutput},
    presigning::PresigningConfig,
    Client as S3Client,
};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{BucketError, BucketResult, ImageKey, ImageStore, ObjectMetadata, PresignedUrl};

/// S3-backed image store
pub struct S3ImageStore {
    s3_client: Arc<S3Client>,
    bucket_name: String,
    presigned_url_expiry_secs: u64,
}

impl S3ImageStore {
    /// Creates a new S3 image store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    /// * `bucket_name` - S3 bucket holding the images
    /// * `presigned_url_expiry_secs` - Lifetime of generated presigned URLs in seconds
    #[must_use]
    pub const fn new(
        s3_client: Arc<S3Client>,
        bucket_name: String,
        presigned_url_expiry_secs: u64,
    ) -> Self {
        Self {
            s3_client,
            bucket_name,
            presigned_url_expiry_secs,
        }
    }

    /// Name of the bucket this store reads from
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn fetch_metadata(&self, key: &ImageKey) -> BucketResult<ObjectMetadata> {
        let result = self
            .s3_client
            .head_object()
            .bucket(&self.bucket_name)
            .key(key.as_str())
            .send()
            .await;

        match result {
            Ok(output) => Ok(object_metadata(&output)),
            Err(SdkError::ServiceError(service_err))
                if matches!(service_err.err(), HeadObjectError::NotFound(_))
                    || service_err.raw().status().as_u16() == 404 =>
            {
                Err(BucketError::ObjectNotFound(key.to_string()))
            }
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() == 403 =>
            {
                Err(BucketError::AccessDenied(key.to_string()))
            }
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                Err(BucketError::UpstreamError(format!(
                    "HeadObject returned HTTP {}",
                    service_err.raw().status().as_u16()
                )))
            }
            Err(e) => Err(BucketError::from(e)),
        }
    }

    async fn presigned_get_url(&self, key: &ImageKey) -> BucketResult<PresignedUrl> {
        let presigned_config =
            PresigningConfig::expires_in(Duration::from_secs(self.presigned_url_expiry_secs))
                .map_err(|e| {
                    BucketError::ConfigError(format!("Failed to create presigning config: {e}"))
                })?;

        let presigned_request = self
            .s3_client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key.as_str())
            .presigned(presigned_config)
            .await
            .map_err(|e| {
                BucketError::S3Error(format!(
                    "Failed to generate presigned URL: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let expires_at: DateTime<Utc> =
            Utc::now() + Duration::from_secs(self.presigned_url_expiry_secs);

        debug!(key = %key, %expires_at, "generated presigned GET URL");

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_at,
        })
    }
}

fn object_metadata(output: &HeadObjectOutput) -> ObjectMetadata {
    ObjectMetadata {
        content_type: output.content_type().map(ToString::to_string),
        content_length: output.content_length(),
        last_modified: output.last_modified().and_then(|last_modified| {
            DateTime::from_timestamp(last_modified.secs(), last_modified.subsec_nanos())
        }),
        e_tag: output.e_tag().map(ToString::to_string),
    }
}
