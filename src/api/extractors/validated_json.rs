//! JSON body extractor with malformed-body rejection mapped to [`AppError`].

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Parses a JSON body, answering 400 `validation_error` for bodies that are
/// not JSON or not of the expected shape.
///
/// Per-field types and constraints are checked afterwards, when the payload
/// is converted into its domain type, so that every violation is reported at
/// once.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::bad_request(e.body_text()))?;

        Ok(ValidatedJson(value))
    }
}
