//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues a single statement per call.
//! Constraint violations are mapped to typed errors, never pre-checked.

pub mod categories;
pub mod questions;

pub use categories::{Category, CategoryRepo, DEFAULT_CATEGORIES};
pub use questions::{Question, QuestionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid reference: {resource} '{id}' does not exist")]
    InvalidReference { resource: &'static str, id: String },
}
