//! POST /api/auth/logout
//!
//! Stateless tokens cannot be revoked server-side; logging out expires both
//! session cookies. No session is required, so a client with a stale cookie
//! can always clear it.

use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::cookies::clear_session;
use crate::backend::auth::settings::AuthSettings;
use crate::shared::MessageResponse;

pub async fn logout(
    State(auth): State<Arc<AuthSettings>>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    tracing::info!("Logout request");
    (
        clear_session(jar, auth.cookie_secure),
        Json(MessageResponse::new("Logged out")),
    )
}
