//! Lenswatch - Main Library
//!
//! Lenswatch is the backend API for a camera registry. Users sign in with a
//! JWT session that is mirrored into HTTP-only cookies, create the locations
//! they own, and register cameras against those locations.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the API and its clients
//!   - Request/response bodies for auth, locations and cameras
//!   - Request validation (`Validate`)
//!   - Configuration and shared error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - JWT sessions, cookies and bcrypt password checks
//!   - Parameterized SQL against PostgreSQL via sqlx
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `lenswatch-server` binary. Without it only the `shared` types build.
//!
//! # Usage
//!
//! ```rust,no_run
//! use lenswatch::backend::server::init::create_app;
//! use lenswatch::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Request Pipeline
//!
//! Every handler is the same short pipeline: validate the JSON body, run one
//! or two parameterized queries, respond. There is no shared mutable state
//! between requests; the only long-lived objects are the connection pool and
//! the JWT keys.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
