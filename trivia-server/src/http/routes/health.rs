//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /healthcheck (also GET /health)
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthcheck", get(health))
        .route("/health", get(health))
}
