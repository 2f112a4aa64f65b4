//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::migrations;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the trivia tables if they don't exist
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    println!("Schema is up to date");
    Ok(())
}
