//! Error handling at the handler boundary

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::image_storage::BucketError;

/// Application error rendered as a plain-text response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The request did not carry a usable `name` query parameter
    #[must_use]
    pub fn missing_name() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: name",
        )
    }

    /// HTTP status of the response
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Body of the response
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {}", self.message),
            500..=599 => tracing::error!("Server error: {}", self.message),
            _ => {}
        }

        (self.status, self.message).into_response()
    }
}

/// Convert storage errors to application errors
///
/// Every storage failure, a missing object included, is reported as a 500.
impl From<BucketError> for AppError {
    fn from(err: BucketError) -> Self {
        match err {
            BucketError::InvalidInput(reason) => Self::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid image name: {reason}"),
            ),
            err => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching the image: {err}"),
            ),
        }
    }
}

impl OperationOutput for AppError {
    type Inner = String;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        String::operation_response(ctx, operation)
    }
}
