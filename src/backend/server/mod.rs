//! Server Module
//!
//! Everything needed to go from an `AppConfig` to a servable `Router`.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database loading
//! ├── init.rs         - Server initialization and app creation
//! └── shutdown.rs     - Ctrl-C / SIGTERM handling
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use lenswatch::backend::server::{create_app, shutdown_signal};
//! use lenswatch::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

/// Graceful shutdown
pub mod shutdown;

// Re-export commonly used types
pub use init::create_app;
pub use shutdown::shutdown_signal;
pub use state::AppState;
