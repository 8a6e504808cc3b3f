mod docs;
pub mod health;
pub mod images;

use aide::axum::{routing::get, ApiRouter};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/getImage", get(images::get_image))
        .api_route("/health", get(health::handler))
}
