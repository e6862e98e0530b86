//! Request Validation
//!
//! Every JSON body accepted by the API implements [`Validate`]. The backend's
//! `ValidatedJson` extractor calls it after deserialization, so a handler only
//! ever sees bodies that already satisfy their schema.
//!
//! The helpers below each check one rule and report the offending field.

use email_address::EmailAddress;
use url::Url;

use crate::shared::error::SharedError;

/// bcrypt only looks at the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Shortest password accepted at signup.
pub const MIN_PASSWORD_BYTES: usize = 8;

/// Declared schema of a request body
pub trait Validate {
    /// Check the value, returning the first failing field.
    fn validate(&self) -> Result<(), SharedError>;
}

/// Postgres TEXT cannot store U+0000.
fn reject_nul(field: &str, value: &str) -> Result<(), SharedError> {
    if value.contains('\0') {
        return Err(SharedError::validation(field, "must not contain NUL characters"));
    }
    Ok(())
}

/// Require `min..=max` characters once surrounding whitespace is trimmed.
pub fn require_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), SharedError> {
    reject_nul(field, value)?;
    let len = value.trim().chars().count();
    if len < min {
        return Err(if min == 1 {
            SharedError::validation(field, "must not be empty")
        } else {
            SharedError::validation(field, format!("must be at least {} characters", min))
        });
    }
    if len > max {
        return Err(SharedError::validation(
            field,
            format!("must be at most {} characters", max),
        ));
    }
    Ok(())
}

/// Same as [`require_length`] with no lower bound, skipped when absent.
pub fn optional_length(field: &str, value: Option<&str>, max: usize) -> Result<(), SharedError> {
    match value {
        Some(v) => require_length(field, v, 0, max),
        None => Ok(()),
    }
}

/// Require a syntactically valid email address.
pub fn require_email(field: &str, value: &str) -> Result<(), SharedError> {
    if EmailAddress::is_valid(value.trim()) {
        Ok(())
    } else {
        Err(SharedError::validation(field, "must be a valid email address"))
    }
}

/// Require a password bcrypt can hash without truncation.
pub fn require_password(field: &str, value: &str) -> Result<(), SharedError> {
    if value.len() < MIN_PASSWORD_BYTES {
        return Err(SharedError::validation(
            field,
            format!("must be at least {} characters", MIN_PASSWORD_BYTES),
        ));
    }
    if value.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            field,
            format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Require an absolute URL whose scheme is one of `schemes`.
pub fn require_url(field: &str, value: &str, schemes: &[&str]) -> Result<(), SharedError> {
    reject_nul(field, value)?;
    let url = Url::parse(value.trim())
        .map_err(|_| SharedError::validation(field, "must be a valid URL"))?;

    if !schemes.contains(&url.scheme()) {
        return Err(SharedError::validation(
            field,
            format!("scheme must be one of: {}", schemes.join(", ")),
        ));
    }
    if !url.has_host() {
        return Err(SharedError::validation(field, "must include a host"));
    }
    Ok(())
}

/// Canonical form used for storing and looking up emails.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
