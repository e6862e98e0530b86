/**
 * Get Current User Handler
 *
 * GET /api/auth/me. Runs behind `require_auth`; the user id comes from the
 * verified access token and the profile is read fresh from the database.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No valid access token
/// * `404 Not Found` - The account was deleted after the token was issued
/// * `503 Service Unavailable` - If database is not configured
pub async fn get_me(
    AuthUser(user): AuthUser,
    State(pool): State<Option<PgPool>>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = db::available(&pool)?;

    let record = get_user_by_id(pool, user.user_id).await?.ok_or_else(|| {
        tracing::warn!("User from token no longer exists: {}", user.user_id);
        BackendError::not_found("user")
    })?;

    Ok(Json(record.into()))
}
