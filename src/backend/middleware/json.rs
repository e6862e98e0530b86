//! Validated JSON bodies
//!
//! [`ValidatedJson`] deserializes the request body like `axum::Json` and then
//! runs the type's [`Validate`] schema. Both failure modes come back as
//! `BackendError`, so every rejection has the same JSON error shape.

use axum::extract::{rejection::JsonRejection, FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::Validate;

/// A JSON body that has passed its declared schema
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                BackendError::handler(rejection.status(), rejection.body_text())
            })?;

        value.validate().map_err(|e| {
            tracing::warn!("Request body failed validation: {}", e);
            e
        })?;

        Ok(ValidatedJson(value))
    }
}
