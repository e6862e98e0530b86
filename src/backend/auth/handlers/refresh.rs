//! POST /api/auth/refresh
//!
//! Verifies the `refresh_token` cookie and issues a new access/refresh pair.
//! The check is stateless: a refresh token stays usable until it expires.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::REFRESH_COOKIE;
use crate::backend::auth::handlers::{start_session, TOKEN_TYPE};
use crate::backend::auth::sessions::TokenKind;
use crate::backend::auth::settings::AuthSettings;
use crate::backend::error::BackendError;
use crate::shared::RefreshResponse;

/// Refresh handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing, expired, or non-refresh token
pub async fn refresh(
    State(auth): State<Arc<AuthSettings>>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<RefreshResponse>), BackendError> {
    let token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Refresh without a refresh cookie");
            BackendError::unauthorized("Refresh token required")
        })?;

    let claims = auth.keys.verify(&token, TokenKind::Refresh).map_err(|e| {
        tracing::warn!("Refresh rejected: {}", e);
        e
    })?;
    let user_id = claims.user_id()?;

    let (jar, access) = start_session(&auth, jar, user_id, &claims.email)?;

    tracing::debug!("Session refreshed for {}", claims.email);

    Ok((
        jar,
        Json(RefreshResponse {
            token: access.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: access.expires_at,
        }),
    ))
}
