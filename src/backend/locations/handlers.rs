//! Location HTTP Handlers
//!
//! All handlers run behind `require_auth`.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use super::db as queries;
use crate::backend::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, ResourceId, ValidatedJson};
use crate::shared::{Location, LocationRequest};

const DUPLICATE_NAME: &str = "A location with that name already exists";

fn duplicate_name(e: sqlx::Error) -> BackendError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => BackendError::conflict(DUPLICATE_NAME),
        _ => BackendError::from(e),
    }
}

/// Trimmed address, with blank treated as absent
fn clean_address(address: Option<&str>) -> Option<&str> {
    address.map(str::trim).filter(|a| !a.is_empty())
}

/// POST /api/locations
pub async fn create_location(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    ValidatedJson(request): ValidatedJson<LocationRequest>,
) -> Result<(StatusCode, Json<Location>), BackendError> {
    let pool = db::available(&pool)?;
    tracing::info!("Create location '{}' for user {}", request.name.trim(), user.user_id);

    let location = queries::create_location(
        pool,
        user.user_id,
        request.name.trim(),
        clean_address(request.address.as_deref()),
    )
    .await
    .map_err(duplicate_name)?;

    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/locations
pub async fn list_locations(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<Location>>, BackendError> {
    let pool = db::available(&pool)?;
    let locations = queries::list_locations(pool, user.user_id).await?;
    tracing::debug!("Listed {} locations for user {}", locations.len(), user.user_id);
    Ok(Json(locations))
}

/// GET /api/locations/{id}
pub async fn get_location(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Location>, BackendError> {
    let pool = db::available(&pool)?;
    queries::get_location(pool, id, user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("location"))
}

/// PUT /api/locations/{id}
pub async fn update_location(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
    ValidatedJson(request): ValidatedJson<LocationRequest>,
) -> Result<Json<Location>, BackendError> {
    let pool = db::available(&pool)?;
    tracing::info!("Update location {} for user {}", id, user.user_id);

    queries::update_location(
        pool,
        id,
        user.user_id,
        request.name.trim(),
        clean_address(request.address.as_deref()),
    )
    .await
    .map_err(duplicate_name)?
    .map(Json)
    .ok_or_else(|| BackendError::not_found("location"))
}

/// DELETE /api/locations/{id}
pub async fn delete_location(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
) -> Result<StatusCode, BackendError> {
    let pool = db::available(&pool)?;

    if !queries::delete_location(pool, id, user.user_id).await? {
        return Err(BackendError::not_found("location"));
    }

    tracing::info!("Deleted location {} for user {}", id, user.user_id);
    Ok(StatusCode::NO_CONTENT)
}
