//! # Local Storage Repository
//!
//! String values by string key, last write wins.

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

    /// Value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, found = value.is_some(), "Local storage read");
        Ok(value)
    }

    /// Stores `value` under `key`, replacing what was there.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now().to_rfc3339();

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
        .bind(&now)
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Local storage write");
        Ok(())
    }

    /// Deletes `key`. Returns whether anything was stored.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// All stored keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM local_storage ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_get_set_remove() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = db.local_storage();

        assert_eq!(storage.get("theme").await.unwrap(), None);

        storage.set("theme", "dark").await.unwrap();
        storage.set("theme", "light").await.unwrap();
        assert_eq!(storage.get("theme").await.unwrap().as_deref(), Some("light"));
        assert_eq!(storage.keys().await.unwrap(), vec!["theme".to_string()]);

        assert!(storage.remove("theme").await.unwrap());
        assert!(!storage.remove("theme").await.unwrap());
        assert!(storage.get("theme").await.unwrap().is_none());
    }
}
