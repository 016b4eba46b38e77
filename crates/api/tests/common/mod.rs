#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use numclass_api::config::{CorsOrigins, ServerConfig};
use numclass_api::router::build_app_router;
use numclass_api::state::AppState;
use numclass_facts::{FactEnricher, NumbersApi};

/// An upstream URL that refuses connections.
pub const UNREACHABLE_UPSTREAM: &str = "http://127.0.0.1:1";

/// Build a test `ServerConfig` pointing the fact lookup at `numbers_api_url`.
pub fn test_config(numbers_api_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        numbers_api_url: numbers_api_url.to_string(),
        fact_timeout_secs: 2,
    }
}

/// Build the full application router exactly as `main.rs` does.
pub fn build_test_app(numbers_api_url: &str) -> Router {
    build_test_app_with(test_config(numbers_api_url))
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    let api = NumbersApi::new(
        config.numbers_api_url.clone(),
        Duration::from_secs(config.fact_timeout_secs),
    )
    .unwrap();

    let state = AppState {
        facts: Arc::new(FactEnricher::new(api)),
    };

    build_app_router(state, &config).unwrap()
}

/// Send a `GET` request to `uri`.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// Send an arbitrary request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
