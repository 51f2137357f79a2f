//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// SQLite repository for mapping storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. The on-disk
/// columns (`long`, `short`, `date_created`) are aliased to the entity
/// field names in every query.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (long, short, date_created)
            VALUES (?, ?, ?)
            RETURNING id, long AS long_url, short AS short_code, visits, date_created AS created_at
            "#,
        )
        .bind(&new_mapping.long_url)
        .bind(&new_mapping.short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long AS long_url, short AS short_code, visits, date_created AS created_at
            FROM urls
            WHERE short = ?
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long AS long_url, short AS short_code, visits, date_created AS created_at
            FROM urls
            WHERE long = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, long AS long_url, short AS short_code, visits, date_created AS created_at
            FROM urls
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
