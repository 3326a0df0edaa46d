use axum::extract::{Json, State};
use axum::response::{IntoResponse, Response};
use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};

use crate::backup_ops::{self, BackupOpsError, CleanupFailure};
use crate::drive::{BackupFile, Credentials};
use crate::http_server::api::client::ApiRequest;
use crate::ServiceState;

/// Single-endpoint dispatcher: the request names an `action` and carries
/// the OAuth config alongside the action's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRequest {
    pub config: Credentials,
    #[serde(flatten)]
    pub action: BackupAction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum BackupAction {
    Auth {
        #[serde(rename = "authCode")]
        auth_code: String,
    },
    Upload {
        data: serde_json::Value,
    },
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    Download {
        #[serde(rename = "fileId")]
        file_id: String,
    },
    Delete {
        #[serde(rename = "fileId")]
        file_id: String,
    },
    Cleanup {
        #[serde(
            default,
            rename = "keepCount",
            skip_serializing_if = "Option::is_none"
        )]
        keep_count: Option<u32>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: String,
    pub file_name: String,
    pub size: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub deleted_count: usize,
    pub failed: Vec<CleanupFailure>,
}

#[axum::debug_handler]
pub async fn handler(
    State(state): State<ServiceState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, BackupApiError> {
    // Validation happens in full before any remote call is issued:
    // unknown actions and missing per-action fields fail here.
    let request: BackupRequest =
        serde_json::from_value(body).map_err(|e| BackupApiError::InvalidRequest(e.to_string()))?;
    let config = request.config;

    match request.action {
        BackupAction::Auth { auth_code } => {
            let grant = backup_ops::exchange_auth_code(config, &auth_code, &state).await?;
            Ok(Json(AuthResponse {
                success: true,
                access_token: grant.access_token,
                refresh_token: grant.refresh_token,
                expires_in: grant.expires_in,
            })
            .into_response())
        }
        BackupAction::Upload { data } => {
            let outcome = backup_ops::upload_backup(config, data, &state).await?;
            let message = format!("Backup {} uploaded to Google Drive", outcome.file_name);
            Ok(Json(UploadResponse {
                success: true,
                file_id: outcome.file_id,
                file_name: outcome.file_name,
                size: outcome.size_label,
                message,
            })
            .into_response())
        }
        BackupAction::List { limit } => {
            let files: Vec<BackupFile> = backup_ops::list_backups(config, limit, &state).await?;
            Ok(Json(files).into_response())
        }
        BackupAction::Download { file_id } => {
            let data = backup_ops::download_backup(config, &file_id, &state).await?;
            Ok(Json(DownloadResponse {
                success: true,
                data,
            })
            .into_response())
        }
        BackupAction::Delete { file_id } => {
            backup_ops::delete_backup(config, &file_id, &state).await?;
            Ok(Json(DeleteResponse {
                success: true,
                message: format!("Backup {} deleted", file_id),
            })
            .into_response())
        }
        BackupAction::Cleanup { keep_count } => {
            let outcome = backup_ops::cleanup_backups(config, keep_count, &state).await?;
            Ok(Json(CleanupResponse {
                success: true,
                deleted_count: outcome.deleted,
                failed: outcome.failures,
            })
            .into_response())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackupApiError {
    #[error("invalid backup request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Ops(#[from] BackupOpsError),
}

impl IntoResponse for BackupApiError {
    fn into_response(self) -> Response {
        match self {
            BackupApiError::InvalidRequest(msg) => (
                http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            BackupApiError::Ops(e) if e.is_validation() => (
                http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response(),
            BackupApiError::Ops(e) => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "backup action failed",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}

// Client implementation - builds request for this operation
impl ApiRequest for BackupRequest {
    type Response = serde_json::Value;

    fn build_request(self, base_url: &Url, client: &Client) -> RequestBuilder {
        let full_url = base_url.join("/api/v0/backup").unwrap();
        client.post(full_url).json(&self)
    }
}
