//! Error types for image storage operations

use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::head_object::HeadObjectError,
};
use thiserror::Error;

/// Result type for image storage operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur during image storage operations
#[derive(Error, Debug)]
pub enum BucketError {
    /// No object is stored under the requested key
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// The bucket refused access to the requested key
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// S3 service error
    #[error("S3 service error: {0}")]
    S3Error(String),

    /// AWS SDK error (dispatch failure, timeout, request construction)
    #[error("AWS SDK error: {0}")]
    AwsError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Upstream service error (5xx from S3)
    #[error("Upstream service error: {0}")]
    UpstreamError(String),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<SdkError<HeadObjectError>> for BucketError {
    fn from(error: SdkError<HeadObjectError>) -> Self {
        match error {
            SdkError::ServiceError(err) => {
                let status = err.raw().status().as_u16();
                match err.err().code() {
                    Some(code) => Self::S3Error(format!("HeadObject returned HTTP {status} ({code})")),
                    None => Self::S3Error(format!("HeadObject returned HTTP {status}")),
                }
            }
            _ => Self::AwsError(DisplayErrorContext(&error).to_string()),
        }
    }
}
