//! Typed, validated JSON request bodies.
//!
//! `ValidatedJson<T>` deserialises the body into `T` and then runs
//! `T::validate`. Any failure, whether a missing field, a wrong JSON type
//! (`"isActive": "true"`), a malformed body or an empty string, becomes
//! `ApiError::Validation` carrying `T::INVALID_MESSAGE`.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use roster_core::ValidationError;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A request body with field constraints beyond its JSON shape.
pub trait Validate {
    /// Message returned to the client when the body is rejected.
    const INVALID_MESSAGE: &'static str;

    fn validate(&self) -> Result<(), ValidationError>;
}

/// JSON body extractor that rejects invalid input before the handler runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                ApiError::Validation(T::INVALID_MESSAGE.to_string())
            })?;

        value.validate().map_err(|e| {
            tracing::debug!(reason = %e, "Request body failed validation");
            ApiError::Validation(T::INVALID_MESSAGE.to_string())
        })?;

        Ok(Self(value))
    }
}
