use chrono::{SecondsFormat, Utc};

use crate::drive::{Credentials, DriveClient, BACKUP_FILE_PREFIX};
use crate::ServiceState;

use super::error::BackupOpsError;
use super::types::UploadOutcome;

/// Serialize an application-state snapshot and write it into the backup
/// container as a new, timestamp-named JSON file.
pub async fn upload_backup(
    credentials: Credentials,
    payload: serde_json::Value,
    state: &ServiceState,
) -> Result<UploadOutcome, BackupOpsError> {
    let mut payload = match payload {
        serde_json::Value::Object(map) => map,
        _ => return Err(BackupOpsError::PayloadNotAnObject),
    };

    let mut client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    let folder_id = client.ensure_backup_folder().await?;

    let exported_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let file_name = backup_file_name(&exported_at);
    payload.insert(
        "exportedAt".to_string(),
        serde_json::Value::String(exported_at),
    );
    let body = serde_json::to_string_pretty(&payload)?;

    let description = format!(
        "Zaazu data backup created {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let file = client
        .upload_json(&folder_id, &file_name, &body, &description)
        .await?;

    let size_label = size_label(body.len());
    tracing::info!(file_id = %file.id, name = %file_name, size = %size_label, "backup uploaded");

    Ok(UploadOutcome {
        file_id: file.id,
        file_name,
        size_label,
    })
}

/// `zaazu-backup-<ISO8601 with ':' and '.' replaced by '-'>.json`
fn backup_file_name(iso_timestamp: &str) -> String {
    format!(
        "{}-{}.json",
        BACKUP_FILE_PREFIX,
        iso_timestamp.replace([':', '.'], "-")
    )
}

/// `"<KB> KB"` with exactly two decimals, from the serialized byte length.
fn size_label(byte_len: usize) -> String {
    format!("{:.2} KB", byte_len as f64 / 1024.0)
}
