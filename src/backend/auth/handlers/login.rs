/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt on the blocking pool
 * - Unknown email and wrong password return the same 401, after the same bcrypt work
 * - User passwords are never returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use sqlx::PgPool;

use crate::backend::auth::handlers::{start_session, TOKEN_TYPE};
use crate::backend::auth::passwords::{verify_dummy_password, verify_password};
use crate::backend::auth::settings::AuthSettings;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::validation::normalize_email;
use crate::shared::{AuthResponse, LoginRequest};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails its schema
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `503 Service Unavailable` - If database is not configured
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(auth): State<Arc<AuthSettings>>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), BackendError> {
    let pool = db::available(&pool)?;
    let email = normalize_email(&request.email);
    tracing::info!("Login request for email: {}", email);

    let Some(user) = get_user_by_email(pool, &email).await? else {
        verify_dummy_password(&request.password, auth.bcrypt_cost).await?;
        tracing::warn!("Login failed: user not found: {}", email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    };

    if !verify_password(&request.password, &user.password_hash).await? {
        tracing::warn!("Login failed: invalid password for: {}", email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let (jar, access) = start_session(&auth, jar, user.id, &user.email)?;

    tracing::info!("User logged in: {}", user.email);

    Ok((
        jar,
        Json(AuthResponse {
            token: access.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: access.expires_at,
            user: user.into(),
        }),
    ))
}
