#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use user_registry::clients::UserClient;
use user_registry::http::{create_router, AppState};
use user_registry::lifecycle::RegistrySystem;

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body should be JSON")
    }
}

/// Router backed by a freshly spawned registry.
pub fn app() -> (Router, RegistrySystem) {
    app_with(false)
}

pub fn app_with(require_fields_on_update: bool) -> (Router, RegistrySystem) {
    let system = RegistrySystem::new(32);
    let state = AppState::new(system.user_client.clone())
        .with_required_fields_on_update(require_fields_on_update);
    (create_router(state), system)
}

/// Router backed by an arbitrary client, e.g. one handed out by a mock.
pub fn app_for(client: UserClient) -> Router {
    create_router(AppState::new(client))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let body = match body {
        Some(text) => Body::from(text.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
