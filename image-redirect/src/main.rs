use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use image_redirect::{
    image_storage::{ImageStore, S3ImageStore},
    server,
    types::Environment,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // Use JSON format for staging/production (Datadog), regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let image_store = S3ImageStore::new(
        s3_client,
        environment.s3_bucket()?,
        environment.signed_url_expiry_secs(),
    );

    tracing::info!(
        bucket = image_store.bucket_name(),
        expiry_secs = environment.signed_url_expiry_secs(),
        "Initialized S3 image store"
    );

    let image_store: Arc<dyn ImageStore> = Arc::new(image_store);

    server::start(environment, image_store).await
}
