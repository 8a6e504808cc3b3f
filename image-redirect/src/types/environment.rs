//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use anyhow::Context;
use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use tracing::Level;

/// Default lifetime of a signed image URL: 15 minutes
const DEFAULT_SIGNED_URL_EXPIRY_SECS: u64 = 15 * 60;

/// Longest lifetime S3 accepts for a presigned URL: 7 days
const MAX_SIGNED_URL_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` contains an invalid value
    pub fn from_env() -> anyhow::Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => anyhow::bail!("Invalid environment: {env}"),
        }
    }

    /// Returns the S3 bucket name holding the images
    ///
    /// # Errors
    ///
    /// Returns an error if the `S3_BUCKET_NAME` environment variable is not set outside development
    pub fn s3_bucket(&self) -> anyhow::Result<String> {
        match self {
            Self::Production | Self::Staging => {
                env::var("S3_BUCKET_NAME").context("S3_BUCKET_NAME environment variable is not set")
            }
            Self::Development => {
                Ok(env::var("S3_BUCKET_NAME").unwrap_or_else(|_| "og-images".to_string()))
            }
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with timeout settings
    ///
    /// Storage failures surface to the caller immediately, so the SDK makes
    /// a single attempt per operation.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard().with_max_attempts(1);

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // LocalStack only supports path-style addressing
        if matches!(self, Self::Development) {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Lifetime of signed image URLs in seconds
    ///
    /// Read from `SIGNED_URL_EXPIRY_SECS`. Values that do not parse or fall
    /// outside `1..=604800` use the 15 minute default.
    #[must_use]
    pub fn signed_url_expiry_secs(&self) -> u64 {
        env::var("SIGNED_URL_EXPIRY_SECS")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| (1..=MAX_SIGNED_URL_EXPIRY_SECS).contains(secs))
            .unwrap_or(DEFAULT_SIGNED_URL_EXPIRY_SECS)
    }

    /// Log level used when `RUST_LOG` is not set
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
