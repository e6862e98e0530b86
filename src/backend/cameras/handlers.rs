//! Camera HTTP Handlers
//!
//! All handlers run behind `require_auth`. A camera whose location belongs
//! to another user answers 404, the same as a missing one.

use axum::{extract::State, http::StatusCode, Json};
use sqlx::PgPool;

use super::db as queries;
use crate::backend::db;
use crate::backend::error::BackendError;
use crate::backend::locations::db::get_location;
use crate::backend::middleware::{AuthUser, ResourceId, ValidatedJson};
use crate::shared::{Camera, CreateCameraRequest, UpdateCameraRequest};

const DUPLICATE_NAME: &str = "A camera with that name already exists at this location";

fn duplicate_name(e: sqlx::Error) -> BackendError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => BackendError::conflict(DUPLICATE_NAME),
        _ => BackendError::from(e),
    }
}

/// POST /api/cameras
///
/// # Errors
///
/// * `404 Not Found` - Location missing or owned by someone else
/// * `409 Conflict` - Camera name already used at that location
pub async fn create_camera(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
    ValidatedJson(request): ValidatedJson<CreateCameraRequest>,
) -> Result<(StatusCode, Json<Camera>), BackendError> {
    let pool = db::available(&pool)?;
    tracing::info!(
        "Register camera '{}' at location {} for user {}",
        request.name.trim(),
        request.location_id,
        user.user_id
    );

    let camera = queries::create_camera(
        pool,
        user.user_id,
        request.location_id,
        request.name.trim(),
        request.stream_url.trim(),
        request.enabled,
    )
    .await
    .map_err(duplicate_name)?
    .ok_or_else(|| {
        tracing::warn!("Location {} not owned by user {}", request.location_id, user.user_id);
        BackendError::not_found("location")
    })?;

    Ok((StatusCode::CREATED, Json(camera)))
}

/// GET /api/cameras
pub async fn list_cameras(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<Camera>>, BackendError> {
    let pool = db::available(&pool)?;
    Ok(Json(queries::list_cameras(pool, user.user_id).await?))
}

/// GET /api/locations/{id}/cameras
pub async fn list_location_cameras(
    AuthUser(user): AuthUser,
    ResourceId(location_id): ResourceId,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<Camera>>, BackendError> {
    let pool = db::available(&pool)?;

    // An empty list must not hide a location the caller does not own.
    if get_location(pool, location_id, user.user_id).await?.is_none() {
        return Err(BackendError::not_found("location"));
    }

    Ok(Json(
        queries::list_location_cameras(pool, location_id, user.user_id).await?,
    ))
}

/// GET /api/cameras/{id}
pub async fn get_camera(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Camera>, BackendError> {
    let pool = db::available(&pool)?;
    queries::get_camera(pool, id, user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("camera"))
}

/// PUT /api/cameras/{id}
pub async fn update_camera(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
    ValidatedJson(request): ValidatedJson<UpdateCameraRequest>,
) -> Result<Json<Camera>, BackendError> {
    let pool = db::available(&pool)?;
    tracing::info!("Update camera {} for user {}", id, user.user_id);

    queries::update_camera(
        pool,
        id,
        user.user_id,
        request.name.trim(),
        request.stream_url.trim(),
        request.enabled,
    )
    .await
    .map_err(duplicate_name)?
    .map(Json)
    .ok_or_else(|| BackendError::not_found("camera"))
}

/// DELETE /api/cameras/{id}
pub async fn delete_camera(
    AuthUser(user): AuthUser,
    ResourceId(id): ResourceId,
    State(pool): State<Option<PgPool>>,
) -> Result<StatusCode, BackendError> {
    let pool = db::available(&pool)?;

    if !queries::delete_camera(pool, id, user.user_id).await? {
        return Err(BackendError::not_found("camera"));
    }

    tracing::info!("Deleted camera {} for user {}", id, user.user_id);
    Ok(StatusCode::NO_CONTENT)
}
