//! # Local Storage Repository
//!
//! String keys to string values, the same shape as browser local storage.
//!
//! ```text
//! local_storage
//! ┌────────────┬──────────────────────────────────────┬──────────────────┐
//! │ key        │ value                                │ updated_at       │
//! ├────────────┼──────────────────────────────────────┼──────────────────┤
//! │ crops      │ [{"id":"1","name":"Wheat",...},...]  │ 2025-01-15T10:.. │
//! │ soil_types │ [{"id":"1","name":"Clay Soil",...}]  │ 2025-01-15T10:.. │
//! │ weather    │ [...]                                │ ...              │
//! │ users      │ []                                   │ ...              │
//! └────────────┴──────────────────────────────────────┴──────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

#[derive(Debug, Clone)]
pub struct LocalStorageRepository {
    pool: SqlitePool,
}

impl LocalStorageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        LocalStorageRepository { pool }
    }

    /// Returns the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "Read storage key");
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Wrote storage key");
        Ok(())
    }

    /// Removes `key`. Returns whether it existed.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }

    /// Removes every key. Returns how many were removed.
    pub async fn clear(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM local_storage")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_set_get_overwrite() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = db.local_storage();

        assert_eq!(storage.get("crops").await.unwrap(), None);

        storage.set("crops", "[]").await.unwrap();
        storage.set("crops", "[1]").await.unwrap();
        assert_eq!(storage.get("crops").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.keys().await.unwrap(), vec!["crops".to_string()]);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = db.local_storage();

        storage.set("a", "1").await.unwrap();
        storage.set("b", "2").await.unwrap();

        assert!(storage.remove("a").await.unwrap());
        assert!(!storage.remove("a").await.unwrap());
        assert_eq!(storage.clear().await.unwrap(), 1);
        assert!(storage.keys().await.unwrap().is_empty());
    }
}
