/**
 * Session Management and JWT Tokens
 *
 * A session is a pair of HS256 tokens with fixed lifetimes:
 *
 * - access token (15 minutes), sent as a bearer header or `access_token` cookie
 * - refresh token (7 days), only ever sent as the `refresh_token` cookie
 *
 * The `kind` claim keeps one from being accepted in place of the other.
 */

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Access token lifetime in seconds
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh token lifetime in seconds
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Which half of the session a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Lifetime of tokens of this kind, in seconds
    pub fn ttl_secs(self) -> i64 {
        match self {
            Self::Access => ACCESS_TOKEN_TTL_SECS,
            Self::Refresh => REFRESH_TOKEN_TTL_SECS,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Access or refresh
    pub kind: TokenKind,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Result<Uuid, SessionError> {
        Uuid::parse_str(&self.sub).map_err(|_| SessionError::InvalidSubject)
    }
}

/// A freshly signed token and the moment it expires
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token verification failures
#[derive(Debug, Error)]
pub enum SessionError {
    /// Bad signature, expired, or malformed
    #[error("token rejected: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("expected {expected:?} token, got {found:?}")]
    WrongKind { expected: TokenKind, found: TokenKind },

    #[error("token subject is not a user id")]
    InvalidSubject,
}

/// Signing and verification keys derived from the configured secret
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Create a token of `kind` for a user
    pub fn issue(&self, user_id: Uuid, email: &str, kind: TokenKind) -> Result<IssuedToken, SessionError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + TimeDelta::seconds(kind.ttl_secs());

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            kind,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = self.sign(&claims)?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and expiry, and that the token is of `expected` kind
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, SessionError> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = decode::<Claims>(token, &self.decoding, &validation)?.claims;

        if claims.kind != expected {
            return Err(SessionError::WrongKind {
                expected,
                found: claims.kind,
            });
        }
        Ok(claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, SessionError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}
