pub mod models;

use std::ops::Deref;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use url::Url;

#[derive(Clone)]
pub struct Database(SqlitePool);

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self(pool)
    }

    pub async fn connect(url: &Url) -> Result<Self, DatabaseSetupError> {
        // a pooled in-memory sqlite gives every connection its own database,
        // so the pool must stay at a single connection in that mode
        let max_connections = if url.as_str().contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url.as_str())
            .await
            .map_err(DatabaseSetupError::Connect)?;
        migrate(&pool).await?;
        Ok(Self(pool))
    }
}

impl Deref for Database {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseSetupError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS log_events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            action TEXT NOT NULL,
            details TEXT NOT NULL,
            user_name TEXT NOT NULL,
            user_id TEXT,
            session_id TEXT,
            device_info TEXT,
            created_at TIMESTAMP NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await
    .map_err(DatabaseSetupError::Migrate)?;

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("Failed to connect to database: {0}")]
    Connect(sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(sqlx::Error),
}
