//! Router and request helpers
//!
//! Builds the real router around a test `AppState` and turns responses into
//! something easy to assert on.

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use lenswatch::backend::auth::{AuthSettings, JwtKeys};
use lenswatch::backend::routes::create_router;
use lenswatch::backend::server::AppState;
use sqlx::PgPool;
use tower::ServiceExt;

/// Signing secret for every test router
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Auth settings with the lowest bcrypt cost and insecure cookies
pub fn test_settings() -> AuthSettings {
    AuthSettings::new(JwtKeys::from_secret(TEST_SECRET.as_bytes()), false, 4)
}

pub fn test_state(db_pool: Option<PgPool>) -> AppState {
    AppState::new(db_pool, test_settings())
}

/// Router with no database; anything that reaches SQL answers 503
pub fn test_router() -> Router {
    create_router(test_state(None))
}

/// Status, headers and JSON body of one response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl TestResponse {
    /// Raw `Set-Cookie` header values
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// The full `Set-Cookie` line for one cookie name
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{}=", name);
        self.set_cookies().into_iter().find(|c| c.starts_with(&prefix))
    }

    /// Just the value of a cookie set by this response
    pub fn cookie_value(&self, name: &str) -> Option<String> {
        self.set_cookie(name).map(|line| {
            let pair = line.split(';').next().unwrap_or_default();
            pair[name.len() + 1..].to_string()
        })
    }
}

/// Run one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Request with a JSON body, optionally carrying a bearer token
pub fn json_request(method: Method, uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Request without a body, optionally carrying a bearer token
pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Request without a body that sends a `Cookie` header
pub fn cookie_request(method: Method, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}
