//! SQLite connection and schema upkeep for the `things` table.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashSet;
use std::str::FromStr;

pub const THINGS_TABLE: &str = "things";

/// Every column a Thing row is read from.
pub const THING_COLUMNS: &[&str] = &["id", "name", "status"];

/// Columns added to an existing table when missing. `id` comes with CREATE TABLE.
const UPGRADE_COLUMNS: &[(&str, &str)] = &[
    ("name", "TEXT NOT NULL DEFAULT ''"),
    ("status", "TEXT"),
];

/// Owns the pool. Built once at startup and handed to the router state.
#[derive(Clone, Debug)]
pub struct ThingStore {
    pool: SqlitePool,
}

impl ThingStore {
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        Self::connect_url(&config.database_url()).await
    }

    /// Private in-memory database; every handle cloned from this store shares it.
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::connect_url("sqlite::memory:").await
    }

    pub async fn connect_url(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = if url.contains(":memory:") {
            // Each connection would get its own empty database; keep exactly one alive.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };
        tracing::debug!(url = %url, "connected to store");
        Ok(ThingStore { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the table if absent, then add any column an older schema lacks.
    pub async fn auto_upgrade(&self) -> Result<(), AppError> {
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                status TEXT
            )
            "#,
            THINGS_TABLE
        );
        sqlx::query(&ddl).execute(&self.pool).await?;

        let existing: HashSet<String> = self.columns().await?.into_iter().collect();
        for (column, decl) in UPGRADE_COLUMNS {
            if existing.contains(*column) {
                continue;
            }
            let alter = format!("ALTER TABLE {} ADD COLUMN {} {}", THINGS_TABLE, column, decl);
            tracing::info!(table = THINGS_TABLE, column = *column, "adding missing column");
            sqlx::query(&alter).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn columns(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<(String,)> =
            sqlx::query_as(&format!("SELECT name FROM pragma_table_info('{}')", THINGS_TABLE))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn auto_upgrade_creates_table_once() {
        let store = ThingStore::in_memory().await.unwrap();
        store.auto_upgrade().await.unwrap();
        store.auto_upgrade().await.unwrap();
        assert_eq!(store.columns().await.unwrap(), vec!["id", "name", "status"]);
    }

    #[tokio::test]
    async fn auto_upgrade_adds_missing_columns() {
        let store = ThingStore::in_memory().await.unwrap();
        sqlx::query("CREATE TABLE things (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)")
            .execute(store.pool())
            .await
            .unwrap();
        sqlx::query("INSERT INTO things (name) VALUES ('old')")
            .execute(store.pool())
            .await
            .unwrap();
        store.auto_upgrade().await.unwrap();
        assert_eq!(store.columns().await.unwrap(), vec!["id", "name", "status"]);
        let (status,): (Option<String>,) = sqlx::query_as("SELECT status FROM things")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(status, None);
    }
}
