//! Shared Error Types
//!
//! Errors that both the backend and API clients can produce or interpret.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request body failed its declared schema
//!
//! # Usage
//!
//! ```rust
//! use lenswatch::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must be a valid email address");
//! assert_eq!(error.field(), Some("email"));
//! ```
use thiserror::Error;

/// Shared error types that can occur on either side of the API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }
}
