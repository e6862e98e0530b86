/**
 * API Routes
 *
 * Public routes carry no session requirement. Protected routes get
 * `require_auth` as a `route_layer`, so it runs only for matched routes and
 * an unknown path still falls through to the 404 fallback.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, refresh, signup};
use crate::backend::cameras::{
    create_camera, delete_camera, get_camera, list_cameras, list_location_cameras, update_camera,
};
use crate::backend::health::health;
use crate::backend::locations::{
    create_location, delete_location, get_location, list_locations, update_location,
};
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Routes reachable without a session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/health", get(health))
}

/// Routes that require a valid access token
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/locations", post(create_location).get(list_locations))
        .route(
            "/api/locations/{id}",
            get(get_location).put(update_location).delete(delete_location),
        )
        .route("/api/locations/{id}/cameras", get(list_location_cameras))
        .route("/api/cameras", post(create_camera).get(list_cameras))
        .route(
            "/api/cameras/{id}",
            get(get_camera).put(update_camera).delete(delete_camera),
        )
        .route_layer(from_fn_with_state(app_state.auth.clone(), require_auth))
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
