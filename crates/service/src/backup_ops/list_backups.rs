use crate::drive::{BackupFile, Credentials, DriveClient};
use crate::ServiceState;

use super::error::BackupOpsError;
use super::{CLEANUP_SCAN_SIZE, LIST_PAGE_SIZE};

/// List backup files in the container, newest first. A missing container
/// means "no backups yet" and is not an error; listing alone never
/// creates the container.
pub async fn list_backups(
    credentials: Credentials,
    limit: Option<u32>,
    state: &ServiceState,
) -> Result<Vec<BackupFile>, BackupOpsError> {
    let page_size = limit.unwrap_or(LIST_PAGE_SIZE).min(CLEANUP_SCAN_SIZE);

    let mut client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    let folder_id = match client.find_backup_folder().await? {
        Some(id) => id,
        None => return Ok(Vec::new()),
    };

    let files = client.list_backups(&folder_id, page_size).await?;
    Ok(files)
}
