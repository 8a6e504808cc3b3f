use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use image_redirect::image_storage::{
    BucketError, BucketResult, ImageKey, ImageStore, ObjectMetadata, PresignedUrl,
};

pub const TEST_BUCKET_HOST: &str = "og-images.s3.eu-central-1.amazonaws.com";
pub const TEST_EXPIRY_SECS: i64 = 900;

/// Storage call recorded by [`InMemoryImageStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    FetchMetadata(String),
    PresignGetUrl(String),
}

/// In-memory image store that signs URLs with a per-call counter
#[derive(Default)]
pub struct InMemoryImageStore {
    objects: HashMap<String, ObjectMetadata>,
    unavailable: bool,
    signing_broken: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<StoreCall>>,
    signatures: AtomicUsize,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an image under `IMAGES/OG/{name}`
    pub fn with_image(mut self, name: &str) -> Self {
        let key = ImageKey::from_name(name).expect("test image name must be valid");
        self.objects.insert(
            key.as_str().to_string(),
            ObjectMetadata {
                content_type: Some("image/jpeg".to_string()),
                content_length: Some(2048),
                ..ObjectMetadata::default()
            },
        );
        self
    }

    /// Every metadata lookup fails with a 5xx from the store
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Every signing attempt fails
    pub fn signing_broken(mut self) -> Self {
        self.signing_broken = true;
        self
    }

    /// Every metadata lookup takes `delay` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn fetch_metadata(&self, key: &ImageKey) -> BucketResult<ObjectMetadata> {
        self.record(StoreCall::FetchMetadata(key.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.unavailable {
            return Err(BucketError::UpstreamError(
                "HeadObject returned HTTP 503".to_string(),
            ));
        }

        self.objects
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| BucketError::ObjectNotFound(key.to_string()))
    }

    async fn presigned_get_url(&self, key: &ImageKey) -> BucketResult<PresignedUrl> {
        self.record(StoreCall::PresignGetUrl(key.to_string()));

        if self.signing_broken {
            return Err(BucketError::S3Error(
                "Failed to generate presigned URL: no credentials".to_string(),
            ));
        }

        let signature = self.signatures.fetch_add(1, Ordering::SeqCst);

        Ok(PresignedUrl {
            url: format!(
                "https://{TEST_BUCKET_HOST}/{key}?X-Amz-Expires={TEST_EXPIRY_SECS}&X-Amz-Signature={signature:064x}"
            ),
            expires_at: Utc::now() + chrono::Duration::seconds(TEST_EXPIRY_SECS),
        })
    }
}
