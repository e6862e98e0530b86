//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, tracing and the JSON fallback
//! - **`api_routes`** - The `/api` endpoints, split into public and protected
//!
//! ## Public
//!
//! - `POST /api/auth/signup`, `POST /api/auth/login`
//! - `POST /api/auth/logout`, `POST /api/auth/refresh`
//! - `GET /api/health`
//!
//! ## Protected (`require_auth`)
//!
//! - `GET /api/auth/me`
//! - `/api/locations`, `/api/locations/{id}`, `/api/locations/{id}/cameras`
//! - `/api/cameras`, `/api/cameras/{id}`

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
