use crate::drive::{Credentials, DriveClient};
use crate::ServiceState;

use super::error::BackupOpsError;

/// Fetch one backup file's raw content and parse it as JSON.
pub async fn download_backup(
    credentials: Credentials,
    file_id: &str,
    state: &ServiceState,
) -> Result<serde_json::Value, BackupOpsError> {
    let mut client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    let payload = client.download(file_id).await?;
    Ok(payload)
}
