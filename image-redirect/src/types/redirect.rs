use aide::OperationOutput;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// `302 Found` redirect to a freshly signed image URL
///
/// Signed URLs are single-use from the caller's point of view, so the
/// response is marked as not storable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRedirect {
    location: String,
}

impl ImageRedirect {
    /// Redirect to `location`
    #[must_use]
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

impl IntoResponse for ImageRedirect {
    fn into_response(self) -> Response {
        (
            StatusCode::FOUND,
            [
                (header::LOCATION, self.location),
                (header::CACHE_CONTROL, "no-store".to_string()),
            ],
        )
            .into_response()
    }
}

impl OperationOutput for ImageRedirect {
    type Inner = Self;

    fn operation_response(
        _ctx: &mut aide::generate::GenContext,
        _operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Some(aide::openapi::Response {
            description: "Redirect to a time-limited signed URL of the image".to_string(),
            ..Default::default()
        })
    }
}
