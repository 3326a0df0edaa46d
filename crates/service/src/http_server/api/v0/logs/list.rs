use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database::models::{LogEvent, LogEventError};
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLogsQuery {
    /// Maximum number of events to return
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEventInfo {
    pub id: i64,
    pub action: String,
    pub details: String,
    pub user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[axum::debug_handler]
pub async fn handler(
    State(state): State<ServiceState>,
    Query(query): Query<ListLogsQuery>,
) -> Result<impl IntoResponse, ListLogsError> {
    let events = LogEvent::list(query.limit, state.database()).await?;

    let infos: Vec<LogEventInfo> = events
        .into_iter()
        .map(|e| LogEventInfo {
            id: e.id,
            action: e.action,
            details: e.details,
            user: e.user_name,
            user_id: e.user_id,
            session_id: e.session_id,
            device_info: e.device_info,
            created_at: e.created_at,
        })
        .collect();

    Ok((http::StatusCode::OK, Json(infos)).into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum ListLogsError {
    #[error("Database error: {0}")]
    Database(#[from] LogEventError),
}

impl IntoResponse for ListLogsError {
    fn into_response(self) -> Response {
        match self {
            ListLogsError::Database(e) => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "failed to list log events",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
