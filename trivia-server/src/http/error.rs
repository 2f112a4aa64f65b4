//! API error types with IntoResponse
//!
//! Every error renders as `{success: false, error: <status>, message}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request body or query failed domain validation (400, or 422 for constraints)
    Validation(ValidationError),

    /// Body or query could not be parsed (400)
    BadRequest { reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Well-formed request that violates a data constraint (422)
    Unprocessable { reason: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(e) if e.is_constraint() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short public message for a status. Details stay in the logs.
    fn message(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "invalid request",
            StatusCode::NOT_FOUND => "not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "could not process the request",
            _ => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Validation(e) => tracing::debug!("Validation failed: {}", e),
            Self::BadRequest { reason } => tracing::debug!("Bad request: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("{} '{}' not found", resource, id),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::debug!("Unprocessable: {}", reason),
            // Log the actual error, return generic message
            Self::Database(e) => tracing::error!("Database error: {}", e),
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": Self::message(status),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::InvalidReference { .. } => Self::Unprocessable {
                reason: e.to_string(),
            },
            DbError::Sqlx(_) => Self::Database(e),
        }
    }
}
