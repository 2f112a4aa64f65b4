//! HTTP server command
//!
//! Ensures the schema exists, then runs the trivia API until shutdown.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use trivia_server::db::migrations;
use trivia_server::http::{run_server, CorsOrigins, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allowed CORS origin (repeatable or comma-separated; default: any origin)
    #[arg(long = "cors-origin", env = "TRIVIA_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let cors_origins =
        CorsOrigins::parse(&args.cors_origins).context("Invalid CORS origin configuration")?;

    let pool = args.db.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Starting trivia server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_origins,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
