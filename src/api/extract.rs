//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock rejections reply with plain-text bodies. These wrappers keep
//! every failure in the JSON error envelope.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::api::dto::pagination::RangeParams;
use crate::domain::pagination::Pagination;
use crate::error::AppError;

/// JSON body that has been deserialized and validated.
///
/// - Body that does not parse as `T` → [`AppError::MalformedRequest`]
/// - Body that fails `T::validate` → [`AppError::Validation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "rejected request body");
            AppError::MalformedRequest
        })?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment. Anything that is not an `i64` is
/// [`AppError::InvalidId`].
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidId)?;

        raw.parse().map(Self).map_err(|_| AppError::InvalidId)
    }
}

/// Pagination window from the `range` query parameter.
///
/// A missing or empty `range` yields the default window.
#[derive(Debug, Clone, Copy)]
pub struct PageRange(pub Pagination);

impl<S> FromRequestParts<S> for PageRange
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RangeParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::InvalidRange)?;

        let range = params.range.unwrap_or_default();
        Pagination::parse_range(&range).map(Self)
    }
}
