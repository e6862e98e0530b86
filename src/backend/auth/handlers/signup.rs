/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate the body against its schema (`ValidatedJson`)
 * 2. Check if the email is already registered
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Issue access and refresh tokens and set them as cookies
 * 6. Return the access token and user info
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use axum_extra::extract::cookie::CookieJar;
use sqlx::PgPool;

use crate::backend::auth::handlers::{start_session, TOKEN_TYPE};
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::settings::AuthSettings;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::validation::normalize_email;
use crate::shared::{AuthResponse, SignupRequest};

const EMAIL_TAKEN: &str = "Email already registered";

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body fails its schema
/// * `409 Conflict` - If the email is already registered
/// * `503 Service Unavailable` - If database is not configured
/// * `500 Internal Server Error` - If hashing, the insert, or token signing fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "display_name": "Front desk"
/// }
/// ```
pub async fn signup(
    State(pool): State<Option<PgPool>>,
    State(auth): State<Arc<AuthSettings>>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), BackendError> {
    let pool = db::available(&pool)?;
    let email = normalize_email(&request.email);
    let display_name = request
        .display_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    tracing::info!("Signup request for email: {}", email);

    if get_user_by_email(pool, &email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict(EMAIL_TAKEN));
    }

    let password_hash = hash_password(&request.password, auth.bcrypt_cost).await?;

    // A concurrent signup can still win the race to the unique index.
    let user = create_user(pool, &email, display_name, &password_hash)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => BackendError::conflict(EMAIL_TAKEN),
            _ => BackendError::from(e),
        })?;

    let (jar, access) = start_session(&auth, jar, user.id, &user.email)?;

    tracing::info!("User created successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(AuthResponse {
            token: access.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: access.expires_at,
            user: user.into(),
        }),
    ))
}
