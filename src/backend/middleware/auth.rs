/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in user. The access token is taken
 * from the `Authorization: Bearer` header when present, otherwise from the
 * `access_token` cookie, verified, and the resulting user is attached to the
 * request extensions for handlers to pick up with [`AuthUser`].
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::backend::auth::cookies::ACCESS_COOKIE;
use crate::backend::auth::sessions::TokenKind;
use crate::backend::auth::settings::AuthSettings;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the access token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// Returns 401 if no token is presented, or if it is invalid, expired, or a
/// refresh token.
pub async fn require_auth(
    State(auth): State<Arc<AuthSettings>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())
        .or_else(|| {
            jar.get(ACCESS_COOKIE)
                .map(|c| c.value().to_string())
                .filter(|t| !t.is_empty())
        })
        .ok_or_else(|| {
            tracing::warn!(path = %request.uri().path(), "Missing session token");
            BackendError::unauthorized("Authentication required")
        })?;

    let claims = auth.keys.verify(&token, TokenKind::Access).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        e
    })?;
    let user_id = claims.user_id()?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Token from an `Authorization: Bearer <token>` header
///
/// A header with an empty token counts as absent.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Axum extractor for the user attached by [`require_auth`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Authentication required")
            })?;

        Ok(AuthUser(user))
    }
}
