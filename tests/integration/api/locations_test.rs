//! Location API integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

fn token() -> String {
    access_token(Uuid::new_v4(), "owner@example.com")
}

#[tokio::test]
async fn test_all_location_routes_require_auth() {
    let app = test_router();
    let id = Uuid::new_v4();

    for (method, uri) in [
        (Method::GET, "/api/locations".to_string()),
        (Method::POST, "/api/locations".to_string()),
        (Method::GET, format!("/api/locations/{}", id)),
        (Method::PUT, format!("/api/locations/{}", id)),
        (Method::DELETE, format!("/api/locations/{}", id)),
        (Method::GET, format!("/api/locations/{}/cameras", id)),
    ] {
        let response = send(&app, empty_request(method.clone(), &uri, None)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_create_location_blank_name() {
    let app = test_router();
    let request = json_request(Method::POST, "/api/locations", json!({"name": "   "}), Some(&token()));

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "name");
}

#[tokio::test]
async fn test_create_location_long_address() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/locations",
        json!({"name": "Warehouse", "address": "a".repeat(256)}),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "address");
}

#[tokio::test]
async fn test_location_name_with_nul_is_rejected() {
    let app = test_router();
    let id = Uuid::new_v4();

    for (method, uri) in [
        (Method::POST, "/api/locations".to_string()),
        (Method::PUT, format!("/api/locations/{}", id)),
    ] {
        let request = json_request(method.clone(), &uri, json!({"name": "Gar\u{0}age"}), Some(&token()));
        let response = send(&app, request).await;
        crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "name");
    }
}

#[tokio::test]
async fn test_create_location_without_database() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/locations",
        json!({"name": "Warehouse", "address": "1 Dock Road"}),
        Some(&token()),
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_malformed_location_id() {
    let app = test_router();

    let response = send(
        &app,
        empty_request(Method::GET, "/api/locations/not-a-uuid", Some(&token())),
    )
    .await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_location_wrong_content_type() {
    let app = test_router();
    let request = axum::http::Request::builder()
        .method(Method::PUT)
        .uri(format!("/api/locations/{}", Uuid::new_v4()))
        .header("authorization", format!("Bearer {}", token()))
        .header("content-type", "text/plain")
        .body(axum::body::Body::from("name=Warehouse"))
        .unwrap();

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
