//! trivia CLI - run and administer the trivia API
//!
//! - `serve`: run the HTTP API (migrates the schema first)
//! - `migrate`: create the schema
//! - `seed`: load the standard categories

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question API backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the telemetry feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database schema if missing
    Migrate(commands::migrate::MigrateArgs),
    /// Insert the standard trivia categories
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so clap's env fallbacks see .env values
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    if env_files.is_empty() {
        tracing::debug!("No .env files found (current dir or ~/.trivia)");
    } else {
        for path in &env_files {
            tracing::debug!("Loaded .env from {}", path.display());
        }
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Seed(args) => commands::run_seed(args).await,
    };

    tracing_setup::shutdown();
    result
}
