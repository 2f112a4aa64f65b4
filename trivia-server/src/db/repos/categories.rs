//! Category repository
//!
//! Categories are read-only through the API; rows arrive via `seed_defaults`
//! or an out-of-band database load.

use std::collections::BTreeMap;

use sqlx::{FromRow, PgPool};

use super::DbError;

/// Standard category set, in id order starting at 1.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every category ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Id → display name for every category.
    ///
    /// Integer keys serialize as JSON object keys ("1": "Science").
    pub async fn mapping(&self) -> Result<BTreeMap<i32, String>, DbError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    /// Fail with `NotFound` unless the category exists.
    pub async fn ensure_exists(&self, id: i32) -> Result<(), DbError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        if !exists.0 {
            return Err(DbError::NotFound {
                resource: "category",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Insert the standard categories, keeping any existing rows.
    ///
    /// Returns how many rows were inserted. The id sequence is advanced past
    /// the seeded ids so later inserts don't collide.
    pub async fn seed_defaults(&self) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for (idx, name) in DEFAULT_CATEGORIES.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO categories (id, type) VALUES ($1, $2)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(idx as i32 + 1)
            .bind(*name)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('categories', 'id'),
                (SELECT MAX(id) FROM categories)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(inserted)
    }
}
