use crate::drive::{Credentials, DriveClient};
use crate::ServiceState;

use super::error::BackupOpsError;

/// Permanently delete one backup file by id.
pub async fn delete_backup(
    credentials: Credentials,
    file_id: &str,
    state: &ServiceState,
) -> Result<(), BackupOpsError> {
    let mut client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    client.delete_file(file_id).await?;
    tracing::info!(file_id = %file_id, "backup deleted");
    Ok(())
}
