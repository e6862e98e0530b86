//! `{id}` path segments
//!
//! `axum::extract::Path` answers a malformed UUID with a plain-text body.
//! [`ResourceId`] wraps it so the rejection uses the JSON error shape.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// The single `{id}` captured by a route
#[derive(Debug, Clone, Copy)]
pub struct ResourceId(pub Uuid);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected path: {}", rejection.body_text());
                BackendError::handler(rejection.status(), "Invalid resource id")
            })?;
        Ok(ResourceId(id))
    }
}
