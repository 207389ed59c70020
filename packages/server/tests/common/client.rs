//! HTTP client for integration testing.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`, so no
//! socket is bound.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

pub struct ApiClient {
    app: Router,
}

/// Status and decoded JSON body of one response. Empty bodies decode to `Null`.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Asserts the status and hands back the body.
    pub fn expect_status(self, status: StatusCode) -> Value {
        assert_eq!(
            self.status, status,
            "unexpected status, body: {}",
            self.body
        );
        self.body
    }

    pub fn ok(self) -> Value {
        self.expect_status(StatusCode::OK)
    }

    pub fn created(self) -> Value {
        self.expect_status(StatusCode::CREATED)
    }

    /// Asserts a 400 and returns the error message.
    pub fn bad_request(self) -> String {
        let body = self.expect_status(StatusCode::BAD_REQUEST);
        body["error"].as_str().unwrap_or_default().to_string()
    }
}

impl ApiClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    pub async fn get(&self, uri: &str) -> ApiResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> ApiResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// POST without a body, for action endpoints.
    pub async fn post_empty(&self, uri: &str) -> ApiResponse {
        self.send(Method::POST, uri, None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> ApiResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> ApiResponse {
        self.send(Method::DELETE, uri, None).await
    }

    /// Sends a raw body, for exercising malformed JSON handling.
    pub async fn post_raw(&self, uri: &str, body: &'static str) -> ApiResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("valid request");
        self.execute(request).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> ApiResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");
        self.execute(request).await
    }

    async fn execute(&self, request: Request<Body>) -> ApiResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        ApiResponse { status, body }
    }
}
