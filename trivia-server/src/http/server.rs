//! Axum server setup
//!
//! Server skeleton with:
//! - CORS on every route (any origin, or a configured list)
//! - Tracing middleware
//! - JSON 404/405 fallbacks
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, Uri};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`Access-Control-Allow-Origin: *`)
    #[default]
    Any,
    /// Only these exact origins
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse configured origins. An empty list means any origin.
    pub fn parse<I, S>(origins: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = origins
            .into_iter()
            .map(|o| o.as_ref().trim().to_owned())
            .filter(|o| !o.is_empty())
            .map(|o| HeaderValue::from_str(&o).map_err(|_| ServerError::InvalidOrigin(o)))
            .collect::<Result<Vec<_>, _>>()?;

        if list.is_empty() {
            Ok(Self::Any)
        } else {
            Ok(Self::List(list))
        }
    }

    fn layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        match self {
            Self::Any => layer.allow_origin(Any),
            Self::List(origins) => layer.allow_origin(AllowOrigin::list(origins.iter().cloned())),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,

    /// Allowed cross-origin callers (default: any)
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            cors_origins: CorsOrigins::Any,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the application router with all routes, fallbacks, and middleware.
pub fn build_router(state: AppState, cors_origins: &CorsOrigins) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::categories::router())
        .merge(routes::questions::router())
        .merge(routes::quizzes::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_origins.layer())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: "route",
        id: uri.path().to_owned(),
    }
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url).await?;
/// let config = ServerConfig::default();
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    match &config.cors_origins {
        CorsOrigins::Any => tracing::info!("CORS: all origins allowed"),
        CorsOrigins::List(origins) => tracing::info!(?origins, "CORS: restricted origins"),
    }

    let app = build_router(AppState::new(pool), &config.cors_origins);

    // Bind listener
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    // Run with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
