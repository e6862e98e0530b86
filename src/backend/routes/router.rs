/**
 * Router Configuration
 *
 * Combines the API routes into a single Axum router, adds request tracing,
 * and answers unknown paths with the JSON error shape.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    let router = router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    router.with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Route not found")
}
