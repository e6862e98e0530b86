//! Authentication Types
//!
//! Request and response bodies for the `/api/auth/*` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{
    optional_length, require_email, require_password, Validate, MAX_PASSWORD_BYTES,
};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SignupRequest {
    /// User's email address, also the login name
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Optional name shown in clients
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Validate for SignupRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        require_password("password", &self.password)?;
        optional_length("display_name", self.display_name.as_deref(), 64)
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        // Existing passwords are only compared, so no minimum beyond non-empty.
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "must not be empty"));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }
        Ok(())
    }
}

/// Auth response
///
/// Returned by signup and login. The access token is also set as an
/// HTTP-only cookie; `token` lets non-browser clients use a bearer header.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Signed access token
    pub token: String,
    /// Always `"Bearer"`
    pub token_type: String,
    /// When the access token stops being accepted
    pub expires_at: DateTime<Utc>,
    /// The authenticated user
    pub user: UserResponse,
}

/// Returned by the refresh endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
