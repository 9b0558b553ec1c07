//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{DeleteFilter, MappingRepository, StoreError};

const SHORT_CODE_CONSTRAINT: &str = "url_mappings_short_code_key";
const ORIGINAL_URL_CONSTRAINT: &str = "url_mappings_original_url_key";

#[derive(sqlx::FromRow)]
struct MappingRow {
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expiration_date: Option<DateTime<Utc>>,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        Self {
            short_code: row.short_code,
            original_url: row.original_url,
            created_at: row.created_at,
            expiration_date: row.expiration_date,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error()
            && db_err.is_unique_violation()
        {
            let field = match db_err.constraint() {
                Some(SHORT_CODE_CONSTRAINT) => "short_code",
                Some(ORIGINAL_URL_CONSTRAINT) => "original_url",
                _ => "unknown",
            };
            return StoreError::DuplicateKey {
                field: field.to_string(),
            };
        }

        StoreError::Backend(e.to_string())
    }
}

/// PostgreSQL store for URL mappings.
///
/// Uniqueness of `short_code` and `original_url` is enforced by table
/// constraints; violations surface as [`StoreError::DuplicateKey`].
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_code, original_url, created_at, expiration_date
            FROM url_mappings
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_code, original_url, created_at, expiration_date
            FROM url_mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlMapping::from))
    }

    async fn insert(&self, mapping: UrlMapping) -> Result<UrlMapping, StoreError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO url_mappings (short_code, original_url, created_at, expiration_date)
            VALUES ($1, $2, $3, $4)
            RETURNING short_code, original_url, created_at, expiration_date
            "#,
        )
        .bind(&mapping.short_code)
        .bind(&mapping.original_url)
        .bind(mapping.created_at)
        .bind(mapping.expiration_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete_one(&self, filter: &DeleteFilter) -> Result<u64, StoreError> {
        let sql = match filter {
            DeleteFilter::ShortCode(_) => "DELETE FROM url_mappings WHERE short_code = $1",
            DeleteFilter::OriginalUrl(_) => "DELETE FROM url_mappings WHERE original_url = $1",
        };

        let result = sqlx::query(sql)
            .bind(filter.value())
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM url_mappings WHERE expiration_date < $1")
            .bind(now)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
