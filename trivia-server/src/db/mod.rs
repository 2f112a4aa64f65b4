//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One statement per mutation, so the store's atomicity covers it
//! - Rely on DB constraints, translate violations - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use sqlx::PgPool;
