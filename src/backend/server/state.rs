/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * Handlers extract only what they use, `State<Option<PgPool>>` or
 * `State<Arc<AuthSettings>>`, rather than the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::settings::AuthSettings;

/// Main application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// `None` when the server runs without a database; data routes answer 503
    pub db_pool: Option<PgPool>,
    /// Signing keys and cookie settings
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(db_pool: Option<PgPool>, auth: AuthSettings) -> Self {
        Self {
            db_pool,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthSettings> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}
