//! Backend Module
//!
//! This module contains all server-side code: the Axum HTTP server, the
//! authentication layer, and the location and camera resources.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database loading, app creation, shutdown
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, bcrypt, JWT sessions and cookies, auth handlers
//! - **`middleware`** - Session check and request extractors
//! - **`locations`** - Owner-scoped location CRUD
//! - **`cameras`** - Camera CRUD scoped through the owning location
//! - **`health`** - Liveness and database probe
//! - **`db`** - Pool, migrations, and the 503 guard
//! - **`error`** - `BackendError` and its JSON response
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `lenswatch-server` binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware and extractors
//! ├── locations/      - Location resource
//! ├── cameras/        - Camera resource
//! ├── health.rs       - Health endpoint
//! ├── db/             - Database access
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an optional `PgPool` and `Arc<AuthSettings>`. Handlers
//! extract the part they need through `FromRef`. With no pool configured the
//! server still runs; authentication failures and bad input are reported
//! first, and anything that needs the database answers 503.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>` and propagate with `?`. Every
//! error reaches the client as `{"error": ..., "status": ...}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Database access
pub mod db;

/// Locations owned by a user
pub mod locations;

/// Cameras installed at a location
pub mod cameras;

/// Health check
pub mod health;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
