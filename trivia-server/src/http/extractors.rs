//! Custom Axum extractors
//!
//! Wrap axum's extractors so rejections render as `ApiError` JSON bodies
//! instead of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body; any parse or content-type failure is a 400
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Query string; malformed values are a 400
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Integer id from the path.
///
/// A segment that isn't an integer can't name a row, so it is a 404.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                reason: rejection.body_text(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource: "resource",
            id: raw.clone(),
        })?;

        Ok(Self(id))
    }
}
