//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and the shared session helper
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! ├── refresh.rs  - Access token renewal from the refresh cookie
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear session cookies
//! - **`refresh`** - POST /api/auth/refresh - Renew the session
//! - **`get_me`** - GET /api/auth/me - Get current user info
//!
//! # Example
//!
//! ```rust,no_run
//! use lenswatch::backend::auth::handlers::{get_me, login, logout, refresh, signup};
//! use lenswatch::backend::server::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/api/auth/signup", post(signup))
//!     .route("/api/auth/login", post(login))
//!     .route("/api/auth/logout", post(logout))
//!     .route("/api/auth/refresh", post(refresh))
//!     .route("/api/auth/me", get(get_me));
//! ```

use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::backend::auth::cookies::with_session;
use crate::backend::auth::sessions::{IssuedToken, TokenKind};
use crate::backend::auth::settings::AuthSettings;
use crate::backend::error::BackendError;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Refresh handler
pub mod refresh;

/// Get current user handler
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use refresh::refresh;
pub use signup::signup;

/// Value of `token_type` in every token-bearing response
pub const TOKEN_TYPE: &str = "Bearer";

/// Issue a fresh access/refresh pair and set both cookies.
///
/// Returns the updated jar and the access token for the response body.
pub(crate) fn start_session(
    auth: &AuthSettings,
    jar: CookieJar,
    user_id: Uuid,
    email: &str,
) -> Result<(CookieJar, IssuedToken), BackendError> {
    let access = auth.keys.issue(user_id, email, TokenKind::Access)?;
    let refresh = auth.keys.issue(user_id, email, TokenKind::Refresh)?;
    let jar = with_session(jar, &access, &refresh, auth.cookie_secure);
    Ok((jar, access))
}
