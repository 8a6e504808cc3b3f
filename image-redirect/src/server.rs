use std::sync::Arc;
use std::time::Duration;

use aide::openapi::OpenApi;
use axum::{http::StatusCode, Extension, Router};
use datadog_tracing::axum::{shutdown_signal, OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};

use crate::{image_storage::ImageStore, routes, types::Environment};

/// Requests running longer than this are answered with `408 Request Timeout`
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the application router with its dependencies attached
///
/// Cross-origin requests are accepted from any origin. Pre-flight requests
/// are answered by the CORS layer and never reach a handler. The CORS layer
/// wraps the request timeout so a 408 also carries the CORS headers.
pub fn router(environment: Environment, image_store: Arc<dyn ImageStore>) -> Router {
    let mut openapi = OpenApi::default();

    routes::handler()
        .finish_api_with(&mut openapi, |api| {
            api.title("Image Redirect")
                .description("Redirects to time-limited signed URLs of Open Graph images")
        })
        .layer(Extension(Arc::new(openapi)))
        .layer(Extension(environment))
        .layer(Extension(image_store))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(CorsLayer::permissive())
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: Environment, image_store: Arc<dyn ImageStore>) -> anyhow::Result<()> {
    let router = router(environment, image_store)
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default());

    let addr = std::net::SocketAddr::from((
        [0, 0, 0, 0],
        std::env::var("PORT").map_or(Ok(8080), |p| p.parse())?,
    ));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(?environment, "Image redirect service started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}
