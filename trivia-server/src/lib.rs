//! trivia-server: HTTP API for trivia questions
//!
//! Serves categories, paginated question listings, search, question
//! creation and deletion, and random quiz questions from PostgreSQL.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, AppState, CorsOrigins, ServerConfig, ServerError};
