//! Middleware Module
//!
//! Request processing that runs before handlers:
//!
//! - **`auth`** - Session token verification and the `AuthUser` extractor
//! - **`json`** - `ValidatedJson`, JSON bodies checked against their schema
//! - **`path`** - `ResourceId`, a UUID path segment with a JSON rejection
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use lenswatch::backend::middleware::{require_auth, AuthUser};
//! use lenswatch::backend::server::AppState;
//!
//! fn protected(state: AppState) -> Router<AppState> {
//!     Router::new()
//!         .route("/api/private", get(|AuthUser(user): AuthUser| async move { user.email }))
//!         .route_layer(from_fn_with_state(state, require_auth))
//! }
//! ```

pub mod auth;

pub mod json;

pub mod path;

pub use auth::{bearer_token, require_auth, AuthUser, AuthenticatedUser};
pub use json::ValidatedJson;
pub use path::ResourceId;
