/**
 * Backend Error Types
 *
 * This module defines the error type every handler returns. Each variant
 * maps to one HTTP status code; the conversion to a response lives in
 * `conversion.rs`.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - Validation failures from the shared module (400)
 * - Missing or rejected credentials (401)
 * - Resources that do not exist or belong to someone else (404)
 * - Unique constraint collisions (409)
 *
 * ## Server errors
 *
 * - No database configured (503)
 * - Query, hashing and task failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::SessionError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use lenswatch::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::not_found("camera");
/// let err = BackendError::unauthorized("Invalid email or password");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. a JSON body rejection)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Shared error (request validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Credentials missing or rejected
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Resource absent, or not owned by the caller
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Unique constraint collision
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// `DATABASE_URL` was not configured or the pool failed to start
    #[error("Database not configured")]
    DatabaseUnavailable,

    /// Query failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Token could not be issued or verified
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// bcrypt failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error for `resource`
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } | Self::Session(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::PasswordHash(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message sent to the client
    ///
    /// Server faults get a generic message; their details are only logged.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. }
            | Self::Unauthorized { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { field, message }) => {
                format!("{} {}", field, message)
            }
            Self::NotFound { resource } => format!("{} not found", capitalize(resource)),
            Self::Session(_) => "Invalid or expired session".to_string(),
            Self::DatabaseUnavailable => "Database not configured".to_string(),
            Self::Database(_)
            | Self::PasswordHash(_)
            | Self::Task(_) => "Internal server error".to_string(),
        }
    }

    /// Field that failed validation, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::SharedError(err) => err.field(),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::conflict("A record with that name already exists");
            }
        }
        Self::Database(err)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
