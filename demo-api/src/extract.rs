use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejections render as [`ApiError::Validation`].
///
/// Only syntax, presence and type are checked. Bad syntax, a missing or
/// mistyped field, or a missing `Content-Type` is a 422 before the handler
/// runs, so invalid input never reaches the store.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
