//! Category seeding command

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::migrations;
use trivia_server::db::repos::{CategoryRepo, DEFAULT_CATEGORIES};

use super::DatabaseArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Load the standard categories, leaving existing rows untouched
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let inserted = CategoryRepo::new(&pool)
        .seed_defaults()
        .await
        .context("Failed to seed categories")?;

    tracing::info!(inserted, "Category seed complete");
    println!(
        "Seeded {} of {} categories ({} already present)",
        inserted,
        DEFAULT_CATEGORIES.len(),
        DEFAULT_CATEGORIES.len() as u64 - inserted
    );
    Ok(())
}
