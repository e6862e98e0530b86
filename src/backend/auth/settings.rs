//! Per-process authentication settings, built once from `AppConfig`.

use crate::backend::auth::sessions::JwtKeys;
use crate::shared::AppConfig;

/// Keys and knobs every auth handler needs
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub keys: JwtKeys,
    /// Mark session cookies `Secure`
    pub cookie_secure: bool,
    /// bcrypt work factor for new hashes
    pub bcrypt_cost: u32,
}

impl AuthSettings {
    pub fn new(keys: JwtKeys, cookie_secure: bool, bcrypt_cost: u32) -> Self {
        Self {
            keys,
            cookie_secure,
            bcrypt_cost,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            JwtKeys::from_secret(config.jwt_secret.as_bytes()),
            config.cookie_secure,
            config.bcrypt_cost,
        )
    }
}
