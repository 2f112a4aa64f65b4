//! Question repository
//!
//! - list: window function for the filtered total in a single query
//! - create: INSERT relying on the category foreign key
//! - delete: single DELETE, rows affected decides 404

use serde::Serialize;
use sqlx::{FromRow, PgPool, Row};

use crate::models::{CategoryFilter, NewQuestion, Paginated, Pagination};
use super::DbError;

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of questions ordered by id.
    ///
    /// `total` counts every row matching the filter, not just this page.
    pub async fn list(
        &self,
        filter: CategoryFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                id,
                question,
                answer,
                difficulty,
                category,
                COUNT(*) OVER() as total
            FROM questions
            WHERE ($1::INT IS NULL OR category = $1)
            ORDER BY id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(filter.id())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
        let items = rows
            .into_iter()
            .map(|r| Question {
                id: r.get("id"),
                question: r.get("question"),
                answer: r.get("answer"),
                difficulty: r.get("difficulty"),
                category: r.get("category"),
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Count questions matching the filter.
    ///
    /// Handlers take the total from `list`; this is a standalone lookup for callers
    /// outside the HTTP layer, such as the integration tests.
    pub async fn count(&self, filter: CategoryFilter) -> Result<i64, DbError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM questions WHERE ($1::INT IS NULL OR category = $1)")
                .bind(filter.id())
                .fetch_one(self.pool)
                .await?;
        Ok(count.0)
    }

    /// Case-insensitive substring search over question text.
    ///
    /// `POSITION` rather than `ILIKE` so `%` and `_` in the term match literally.
    /// An empty term matches every question.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE POSITION(LOWER($1) IN LOWER(question)) > 0
            ORDER BY id ASC
            "#,
        )
        .bind(term)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// All questions in one category, ordered by id.
    pub async fn list_for_category(&self, category_id: i32) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Questions eligible for the next quiz round.
    pub async fn quiz_candidates(
        &self,
        filter: CategoryFilter,
        previous: &[i32],
    ) -> Result<Vec<Question>, DbError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE ($1::INT IS NULL OR category = $1)
              AND NOT (id = ANY($2::INT[]))
            ORDER BY id ASC
            "#,
        )
        .bind(filter.id())
        .bind(previous)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a single question by id.
    ///
    /// No route reads one question; used to check stored rows from outside the HTTP layer.
    pub async fn get(&self, id: i32) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "question",
            id: id.to_string(),
        })
    }

    /// Insert a question, returning its generated id.
    ///
    /// An unknown category surfaces as `InvalidReference` via the foreign key.
    pub async fn create(&self, new: &NewQuestion) -> Result<i32, DbError> {
        let id: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(new.question.as_str())
        .bind(new.answer.as_str())
        .bind(new.category)
        .bind(new.difficulty.get())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let fk_violation = e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation());
            if fk_violation {
                DbError::InvalidReference {
                    resource: "category",
                    id: new.category.to_string(),
                }
            } else {
                DbError::Sqlx(e)
            }
        })?;

        Ok(id.0)
    }

    /// Delete a question permanently.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
