//! Command implementations for the trivia CLI

pub mod migrate;
pub mod seed;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;

pub use migrate::run_migrate;
pub use seed::run_seed;
pub use serve::run_serve;

use trivia_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use trivia_server::db::{create_pool_with_options, PgPool};

/// Database connection arguments shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect to the configured database.
    pub async fn connect(&self) -> Result<PgPool> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ~/.trivia/.env")?;

        create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
