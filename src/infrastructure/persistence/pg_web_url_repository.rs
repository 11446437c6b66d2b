//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewWebUrl, WebUrl};
use crate::domain::repositories::{UrlSummary, WebUrlRepository};
use crate::error::AppError;

/// PostgreSQL repository for the `web_urls` table.
///
/// Every method is a single statement, so each call commits independently.
/// Suffix uniqueness relies on the `web_urls_suffix_key` constraint.
pub struct PgWebUrlRepository {
    pool: Arc<PgPool>,
}

impl PgWebUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebUrlRepository for PgWebUrlRepository {
    async fn find_by_suffix(&self, suffix: &str) -> Result<Option<WebUrl>, AppError> {
        let row = sqlx::query_as::<_, WebUrl>(
            r#"
            SELECT id, original_url, suffix, clicks, created_at, expires_at
            FROM web_urls
            WHERE suffix = $1
            "#,
        )
        .bind(suffix)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, new_url: NewWebUrl) -> Result<WebUrl, AppError> {
        let row = sqlx::query_as::<_, WebUrl>(
            r#"
            INSERT INTO web_urls (original_url, suffix, clicks, created_at, expires_at)
            VALUES ($1, $2, 0, $3, $4)
            RETURNING id, original_url, suffix, clicks, created_at, expires_at
            "#,
        )
        .bind(&new_url.original_url)
        .bind(&new_url.suffix)
        .bind(new_url.created_at)
        .bind(new_url.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM web_urls WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_clicks(&self, id: i64) -> Result<Option<WebUrl>, AppError> {
        let row = sqlx::query_as::<_, WebUrl>(
            r#"
            UPDATE web_urls
            SET clicks = clicks + 1
            WHERE id = $1
            RETURNING id, original_url, suffix, clicks, created_at, expires_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM web_urls WHERE expires_at < $1")
            .bind(now)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn summary(&self, now: DateTime<Utc>) -> Result<UrlSummary, AppError> {
        let (total, expired, total_clicks): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE expires_at < $1),
                COALESCE(SUM(clicks), 0)::BIGINT
            FROM web_urls
            "#,
        )
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(UrlSummary {
            total,
            live: total - expired,
            expired,
            total_clicks,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
