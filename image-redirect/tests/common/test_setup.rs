use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use image_redirect::{server, types::Environment};
use tower::ServiceExt;

use super::InMemoryImageStore;

/// Setup test environment with tracing enabled
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired to an in-memory image store
pub struct TestContext {
    pub router: Router,
    pub image_store: Arc<InMemoryImageStore>,
}

impl TestContext {
    pub fn new(image_store: InMemoryImageStore) -> Self {
        Self::with_environment(Environment::Development, image_store)
    }

    pub fn with_environment(environment: Environment, image_store: InMemoryImageStore) -> Self {
        setup_test_env();

        let image_store = Arc::new(image_store);
        let router = server::router(environment, image_store.clone());

        Self {
            router,
            image_store,
        }
    }

    pub async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        self.send_request(request).await
    }
}

pub async fn parse_text_body(response: Response) -> String {
    use http_body_util::BodyExt;

    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

pub async fn parse_json_body(response: Response) -> serde_json::Value {
    let body = parse_text_body(response).await;
    serde_json::from_str(&body).expect("Body is not JSON")
}
