//! Authentication API integration tests
//!
//! Tests for signup, login, logout, refresh and the current-user endpoint.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_logout_clears_both_cookies() {
    let app = test_router();

    let response = send(&app, empty_request(Method::POST, "/api/auth/logout", None)).await;

    crate::assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "Logged out"}));

    let access = response.set_cookie("access_token").expect("access cookie cleared");
    crate::assert_contains!(access, "Max-Age=0");
    crate::assert_contains!(access, "Path=/");
    crate::assert_contains!(access, "HttpOnly");

    let refresh = response.set_cookie("refresh_token").expect("refresh cookie cleared");
    crate::assert_contains!(refresh, "Max-Age=0");
    crate::assert_contains!(refresh, "Path=/api/auth");
}

#[tokio::test]
async fn test_logout_needs_no_session() {
    let app = test_router();
    let request = cookie_request(Method::POST, "/api/auth/logout", "access_token=garbage");

    let response = send(&app, request).await;

    crate::assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = test_router();

    let response = send(&app, empty_request(Method::POST, "/api/auth/refresh", None)).await;

    crate::assert_error_body!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rotates_session() {
    let app = test_router();
    let user_id = Uuid::new_v4();
    let cookie = format!("refresh_token={}", refresh_token(user_id, "cam@example.com"));

    let response = send(&app, cookie_request(Method::POST, "/api/auth/refresh", &cookie)).await;

    crate::assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["token_type"], "Bearer");
    assert!(response.body["expires_at"].is_string());

    let access = response.cookie_value("access_token").expect("new access cookie");
    assert_eq!(response.body["token"], access.as_str());
    assert!(response.cookie_value("refresh_token").is_some());

    let access_line = response.set_cookie("access_token").unwrap();
    crate::assert_contains!(access_line, "Max-Age=900");
    crate::assert_contains!(access_line, "SameSite=Lax");
    let refresh_line = response.set_cookie("refresh_token").unwrap();
    crate::assert_contains!(refresh_line, "Max-Age=604800");
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = test_router();
    let cookie = format!("refresh_token={}", access_token(Uuid::new_v4(), "cam@example.com"));

    let response = send(&app, cookie_request(Method::POST, "/api/auth/refresh", &cookie)).await;

    crate::assert_error_body!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_invalid_email() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/auth/login",
        json!({"email": "not-an-email", "password": "password123"}),
        None,
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "email");
}

#[tokio::test]
async fn test_login_missing_field_keeps_rejection_status() {
    let app = test_router();
    let request = json_request(Method::POST, "/api/auth/login", json!({"email": "a@b.co"}), None);

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_without_database() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/auth/login",
        json!({"email": "user@example.com", "password": "password123"}),
        None,
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_signup_short_password() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/auth/signup",
        json!({"email": "user@example.com", "password": "short"}),
        None,
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "password");
}

#[tokio::test]
async fn test_signup_display_name_with_nul() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/auth/signup",
        json!({"email": "user@example.com", "password": "password123", "display_name": "Ann\u{0}"}),
        None,
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::BAD_REQUEST, "display_name");
}

#[tokio::test]
async fn test_signup_without_database() {
    let app = test_router();
    let request = json_request(
        Method::POST,
        "/api/auth/signup",
        json!({"email": "user@example.com", "password": "password123", "display_name": "Front desk"}),
        None,
    );

    let response = send(&app, request).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = test_router();

    let response = send(&app, empty_request(Method::GET, "/api/auth/me", None)).await;

    crate::assert_error_body!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token_reaches_handler() {
    let app = test_router();
    let token = access_token(Uuid::new_v4(), "cam@example.com");

    let response = send(&app, empty_request(Method::GET, "/api/auth/me", Some(&token))).await;

    crate::assert_error_body!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_me_with_cookie_token() {
    let app = test_router();
    let cookie = format!("access_token={}", access_token(Uuid::new_v4(), "cam@example.com"));

    let response = send(&app, cookie_request(Method::GET, "/api/auth/me", &cookie)).await;

    crate::assert_status!(response, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = test_router();
    let foreign = lenswatch::backend::auth::JwtKeys::from_secret(b"some-other-secret-0123456789abcdef")
        .issue(Uuid::new_v4(), "cam@example.com", lenswatch::backend::auth::TokenKind::Access)
        .unwrap()
        .token;

    let response = send(&app, empty_request(Method::GET, "/api/auth/me", Some(&foreign))).await;

    crate::assert_error_body!(response, StatusCode::UNAUTHORIZED);
}
