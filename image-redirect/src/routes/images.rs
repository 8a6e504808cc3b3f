use std::sync::Arc;

use axum::{extract::Query, Extension};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    image_storage::{ImageKey, ImageStore},
    types::{AppError, ImageRedirect},
};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImageQuery {
    /// Name of the image inside the `IMAGES/OG/` folder of the bucket
    pub name: Option<String>,
}

/// Redirects to a time-limited signed URL of an Open Graph image
///
/// 1. Maps `name` to the key `IMAGES/OG/{name}`
/// 2. Fetches the object metadata to make sure the image exists
/// 3. Signs a GET URL for the key and redirects to it
///
/// # Errors
///
/// - 400 if `name` is missing, empty or would resolve outside `IMAGES/OG/`
/// - 500 with `Error fetching the image: <message>` for any storage failure,
///   including a missing object
#[instrument(skip(image_store))]
pub async fn get_image(
    Extension(image_store): Extension<Arc<dyn ImageStore>>,
    Query(query): Query<ImageQuery>,
) -> Result<ImageRedirect, AppError> {
    let name = query
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(AppError::missing_name)?;

    let key = ImageKey::from_name(name)?;

    let metadata = image_store.fetch_metadata(&key).await?;

    tracing::debug!(
        name = key.name(),
        content_type = ?metadata.content_type,
        content_length = ?metadata.content_length,
        last_modified = ?metadata.last_modified,
        e_tag = ?metadata.e_tag,
        "image found"
    );

    let presigned_url = image_store.presigned_get_url(&key).await?;

    tracing::info!(
        key = %key,
        expires_at = %presigned_url.expires_at,
        "redirecting to presigned URL"
    );

    Ok(ImageRedirect::to(presigned_url.url))
}
