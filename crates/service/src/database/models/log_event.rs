use sqlx::FromRow;
use time::OffsetDateTime;

use crate::database::Database;

/// A single audit-log entry recorded by the admin panel. Rows are
/// append-only; there is no update or delete path.
#[derive(FromRow, Debug, Clone)]
pub struct LogEvent {
    pub id: i64,
    pub action: String,
    pub details: String,
    pub user_name: String,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub device_info: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default, Clone)]
pub struct NewLogEvent {
    pub action: String,
    pub details: String,
    pub user_name: String,
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub device_info: Option<String>,
}

impl LogEvent {
    pub async fn create(event: NewLogEvent, db: &Database) -> Result<LogEvent, LogEventError> {
        let created_at = OffsetDateTime::now_utc();
        let log_event = sqlx::query_as::<_, LogEvent>(
            r#"
            INSERT INTO log_events (action, details, user_name, user_id, session_id, device_info, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, action, details, user_name, user_id, session_id, device_info, created_at
            "#,
        )
        .bind(event.action)
        .bind(event.details)
        .bind(event.user_name)
        .bind(event.user_id)
        .bind(event.session_id)
        .bind(event.device_info)
        .bind(created_at)
        .fetch_one(&**db)
        .await?;

        Ok(log_event)
    }

    pub async fn list(limit: Option<u32>, db: &Database) -> Result<Vec<LogEvent>, LogEventError> {
        let limit = limit.unwrap_or(100).min(1000) as i64;

        let events = sqlx::query_as::<_, LogEvent>(
            r#"
            SELECT id, action, details, user_name, user_id, session_id, device_info, created_at
            FROM log_events
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&**db)
        .await?;

        Ok(events)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogEventError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
