//! Schema creation for the trivia tables
//!
//! Every statement is idempotent, so this runs on each server start.

use sqlx::PgPool;

/// Create the `categories` and `questions` tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id),
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}
