//! Camera API integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

fn token() -> String {
    access_token(Uuid::new_v4(), "owner@example.com")
}

#[tokio::test]
async fn test_camera_routes_require_auth() {
    let app = test_router();
    let id = Uuid::new_v4();

    for (method, uri) in [
        (Method::GET, "/api/cameras".to_string()),
        (Method::POST, "/api/cameras".to_string()),
        (Method::GET, format!("/api/cameras/{}", id)),
        (Method::PUT, format!("/api/cameras/{}", id)),
        (Method::DELETE, format!("/api/cameras/{}", id)),
    ] {
        let response = send(&app, empty_request(method.clone(), &uri, None)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_create_camera_bad_scheme() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/cameras",
        json!({
            "location_id": Uuid::new_v4(),
            "name": "Front door",
            "stream_url": "ftp://10.0.0.5/stream"
        }),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "stream_url");
}

#[tokio::test]
async fn test_stream_url_with_nul_is_rejected() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/cameras",
        json!({
            "location_id": Uuid::new_v4(),
            "name": "Front door",
            "stream_url": "rtsp://10.0.0.1/a\u{0}b"
        }),
        Some(&token()),
    );
    let response = send(&app, request).await;
    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "stream_url");

    let request = json_request(
        Method::PUT,
        &format!("/api/cameras/{}", Uuid::new_v4()),
        json!({"name": "Front\u{0}door", "stream_url": "rtsp://10.0.0.1/a", "enabled": true}),
        Some(&token()),
    );
    let response = send(&app, request).await;
    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "name");
}

#[tokio::test]
async fn test_create_camera_malformed_location_id() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/cameras",
        json!({
            "location_id": "12345",
            "name": "Front door",
            "stream_url": "rtsp://10.0.0.5/stream"
        }),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_camera_requires_enabled() {
    let app = test_router();
    let request = json_request(
        Method::PUT,
        &format!("/api/cameras/{}", Uuid::new_v4()),
        json!({"name": "Front door", "stream_url": "rtsp://10.0.0.5/stream"}),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_camera_without_database() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/cameras",
        json!({
            "location_id": Uuid::new_v4(),
            "name": "Front door",
            "stream_url": "rtsps://10.0.0.5:322/stream"
        }),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_list_cameras_without_database() {
    let app = test_router();

    let response = send(&app, empty_request(Method::GET, "/api/cameras", Some(&token()))).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}
