use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ServiceState;

use super::MediaKind;

const DEFAULT_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Public path the stored thumbnail is served from.
    pub url: String,
}

#[axum::debug_handler]
pub async fn handler(
    State(state): State<ServiceState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UploadThumbnailError> {
    let mut kind: Option<MediaKind> = None;
    let mut id: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut file_data: Option<Vec<u8>> = None;

    // Parse multipart form data
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadThumbnailError::MultipartError(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| UploadThumbnailError::MultipartError(e.to_string()))?;
                kind = Some(text.parse::<MediaKind>().map_err(|_| {
                    UploadThumbnailError::InvalidRequest(format!(
                        "type must be one of videos, jogos, atividades (got '{}')",
                        text
                    ))
                })?);
            }
            "id" => {
                id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| UploadThumbnailError::MultipartError(e.to_string()))?,
                );
            }
            "file" => {
                file_name = field.file_name().map(|n| n.to_string());
                file_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| UploadThumbnailError::MultipartError(e.to_string()))?
                        .to_vec(),
                );
            }
            _ => {}
        }
    }

    let kind = kind.ok_or_else(|| UploadThumbnailError::InvalidRequest("type is required".into()))?;
    let id = id.ok_or_else(|| UploadThumbnailError::InvalidRequest("id is required".into()))?;
    let file_data =
        file_data.ok_or_else(|| UploadThumbnailError::InvalidRequest("file is required".into()))?;

    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(UploadThumbnailError::InvalidRequest(
            "id must be a plain identifier".into(),
        ));
    }

    let extension = extension_for(file_name.as_deref());
    let stored_name = format!("{}.{}", id, extension);

    let dir = state.thumbnail_root().join(kind.as_str());
    tokio::fs::create_dir_all(&dir).await?;
    tokio::fs::write(dir.join(&stored_name), &file_data).await?;

    let url = format!("/thumbnails/{}/{}", kind, stored_name);
    let content_type = mime_guess::from_path(&stored_name).first_or_octet_stream();
    tracing::info!(kind = %kind, id = %id, content_type = %content_type, bytes = file_data.len(), "thumbnail stored");

    Ok((
        http::StatusCode::OK,
        Json(UploadResponse { success: true, url }),
    )
        .into_response())
}

/// Extension of the uploaded filename, lowercased; anything missing or
/// suspicious falls back to jpg.
fn extension_for(file_name: Option<&str>) -> String {
    let candidate = file_name
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext))
        .map(|ext| ext.to_ascii_lowercase());

    match candidate {
        Some(ext)
            if !ext.is_empty()
                && ext.len() <= 5
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext
        }
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadThumbnailError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Multipart error: {0}")]
    MultipartError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadThumbnailError {
    fn into_response(self) -> Response {
        match self {
            UploadThumbnailError::InvalidRequest(msg)
            | UploadThumbnailError::MultipartError(msg) => (
                http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
            UploadThumbnailError::Io(e) => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "failed to store thumbnail",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
