/**
 * Server Initialization
 *
 * Builds the application state from `AppConfig` and hands it to the router.
 *
 * # Initialization Process
 *
 * 1. Derive `AuthSettings` (JWT keys, cookie flags, bcrypt cost)
 * 2. Load the optional database pool and run migrations
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::settings::AuthSettings;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// Never fails: a missing or unreachable database leaves `db_pool` empty and
/// data routes answer 503 until restart.
pub async fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing lenswatch backend server");

    let auth = AuthSettings::from_config(config);
    if !auth.cookie_secure {
        tracing::warn!("COOKIE_SECURE is off; session cookies will be sent over plain HTTP");
    }

    let db_pool = load_database(config).await;
    let app_state = AppState::new(db_pool, auth);

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
