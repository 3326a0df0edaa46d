use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::database::models::{LogEvent, LogEventError, NewLogEvent};
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    /// What happened, e.g. "video.update"
    pub action: String,

    /// Free-form description of the change
    pub details: String,

    /// Display name of the admin who made the change
    pub user: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_info: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogResponse {
    pub success: bool,
    pub id: i64,
}

#[axum::debug_handler]
pub async fn handler(
    State(state): State<ServiceState>,
    Json(req): Json<CreateLogRequest>,
) -> Result<impl IntoResponse, CreateLogError> {
    for (field, value) in [
        ("action", &req.action),
        ("details", &req.details),
        ("user", &req.user),
    ] {
        if value.trim().is_empty() {
            return Err(CreateLogError::MissingField(field));
        }
    }

    let event = LogEvent::create(
        NewLogEvent {
            action: req.action,
            details: req.details,
            user_name: req.user,
            user_id: req.user_id,
            session_id: req.session_id,
            device_info: req.device_info,
        },
        state.database(),
    )
    .await?;

    tracing::debug!(id = event.id, action = %event.action, "log event recorded");

    Ok((
        http::StatusCode::OK,
        Json(CreateLogResponse {
            success: true,
            id: event.id,
        }),
    )
        .into_response())
}

#[derive(Debug, thiserror::Error)]
pub enum CreateLogError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Database error: {0}")]
    Database(#[from] LogEventError),
}

impl IntoResponse for CreateLogError {
    fn into_response(self) -> Response {
        match self {
            CreateLogError::MissingField(_) => (
                http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            CreateLogError::Database(e) => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "failed to record log event",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for CreateLogRequest {
    type Response = CreateLogResponse;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/logs").unwrap();
        client.post(full_url).json(&self)
    }
}
