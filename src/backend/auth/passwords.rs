//! bcrypt password hashing
//!
//! Both calls run on the blocking pool.

use tokio::sync::OnceCell;

use crate::backend::error::BackendError;

/// Stand-in hash checked when no account matches, built on first use.
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

/// Hash a password with the given work factor
pub async fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    let password = password.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Compare a password against a stored bcrypt hash
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, BackendError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

/// Spend the same bcrypt work as a real check, for logins with no matching account
pub async fn verify_dummy_password(password: &str, cost: u32) -> Result<bool, BackendError> {
    let hash = DUMMY_HASH
        .get_or_try_init(|| hash_password("lenswatch-no-such-account", cost))
        .await?;
    verify_password(password, hash).await
}
