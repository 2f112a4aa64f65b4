//! Environment loading
//!
//! Priority order (highest to lowest):
//! 1. Variables already set in the process environment
//! 2. ./.env in the current directory
//! 3. ~/.trivia/.env
//!
//! dotenvy never overwrites a variable that is already set, so loading the
//! most specific file first gives that order.

use std::path::PathBuf;

/// Load `.env` files, returning the paths that were read.
///
/// Runs before tracing is initialized; the caller logs the result.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// The trivia config directory (~/.trivia)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".trivia"))
}
