//! OpenAPI document and Scalar UI, hidden in production

use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json,
};

use crate::types::Environment;

const OPENAPI_PATH: &str = "/openapi.json";

pub fn handler() -> ApiRouter {
    let scalar = Scalar::new(OPENAPI_PATH).with_title("Image Redirect API");

    ApiRouter::new()
        .route("/docs", scalar.axum_route())
        .route(OPENAPI_PATH, get(openapi_schema))
}

#[allow(clippy::unused_async)]
async fn openapi_schema(
    Extension(environment): Extension<Environment>,
    Extension(openapi): Extension<Arc<OpenApi>>,
) -> Response {
    if environment.show_api_docs() {
        Json(openapi.as_ref()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
