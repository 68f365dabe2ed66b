//! Durable sqlite-backed secret store.
//!
//! Consume is a single `DELETE ... RETURNING` statement, never a read
//! followed by a separate delete: two concurrent consumers racing a
//! read-then-delete sequence could both see the row before either removes
//! it, which would break the at-most-once delivery guarantee.

use crate::store::{ExpiringSecretStore, SecretStore};
use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sealbox_core::{Secret, SecretId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use tracing::debug;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS secrets (
    id         BLOB PRIMARY KEY,
    payload    TEXT NOT NULL,
    created_at INTEGER NOT NULL
)
"#;

/// A secret store backed by a sqlite table.
///
/// Rows are `(id, payload, created_at)` with `created_at` in unix
/// milliseconds, which is what the retention sweep filters on.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `url` (e.g. `sqlite:/var/lib/sealbox/secrets.db`),
    /// creating the database file and schema if needed.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Wrap an existing pool, ensuring the schema exists.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SecretStore for SqliteStore {
    async fn create(&self, secret: Secret, now: DateTime<Utc>) -> Result<()> {
        // INSERT OR REPLACE keeps the documented last-write-wins contract
        // for the (practically unreachable) same-id collision.
        sqlx::query("INSERT OR REPLACE INTO secrets (id, payload, created_at) VALUES (?1, ?2, ?3)")
            .bind(secret.id.as_bytes().to_vec())
            .bind(secret.payload.as_str())
            .bind(now.timestamp_millis())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn consume(&self, id: SecretId) -> Result<Option<Secret>> {
        // One statement: the row is gone the moment it is returned.
        let row = sqlx::query("DELETE FROM secrets WHERE id = ?1 RETURNING payload")
            .bind(id.as_bytes().to_vec())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| {
            let payload: String = row.get("payload");
            Secret::new(id, payload)
        }))
    }

    async fn count(&self) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM secrets")
            .fetch_one(&self.pool)
            .await?;
        let n: i64 = row.get("n");
        Ok(n as u64)
    }
}

#[async_trait]
impl ExpiringSecretStore for SqliteStore {
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let result = sqlx::query("DELETE FROM secrets WHERE created_at < ?1")
            .bind(cutoff.timestamp_millis())
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected();
        debug!(deleted, "expired secrets removed");
        Ok(deleted)
    }
}
