use aide::axum::IntoApiResponse;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    status: &'static str,
    /// Current version of the service
    semver: &'static str,
    /// Commit hash of the current build (if available)
    rev: Option<&'static str>,
}

/// Health check endpoint
///
/// Reports liveness and build information without touching the bucket.
pub async fn handler() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok",
        semver: env!("CARGO_PKG_VERSION"),
        rev: option_env!("GIT_REV"),
    })
}
