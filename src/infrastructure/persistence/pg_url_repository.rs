//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// PostgreSQL repository for URL record storage and retrieval.
///
/// Creation is a two-step write: `insert` lets the identity column assign an
/// id, `attach_code` then commits the code derived from it. Both lookup
/// queries require a committed code, so a row between the two steps is never
/// returned. Uniqueness is enforced by the `urls_original_url_key` and
/// `urls_short_code_key` constraints and surfaces as [`AppError::Conflict`].
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_row(row: PgRow) -> Result<UrlRecord, sqlx::Error> {
    Ok(UrlRecord::new(
        row.try_get("id")?,
        row.try_get("original_url")?,
        row.try_get("short_code")?,
        row.try_get("created_at")?,
    ))
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, original_url: &str) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO urls (original_url) VALUES ($1) RETURNING id",
        )
        .bind(original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn attach_code(&self, id: i64, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE urls SET short_code = $2 WHERE id = $1")
            .bind(id)
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE original_url = $1 AND short_code IS NOT NULL
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(map_row).transpose()?)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(map_row).transpose()?)
    }
}
