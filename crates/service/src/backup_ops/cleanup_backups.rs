use crate::drive::{Credentials, DriveClient};
use crate::ServiceState;

use super::error::BackupOpsError;
use super::types::{CleanupFailure, CleanupOutcome};
use super::{CLEANUP_SCAN_SIZE, DEFAULT_KEEP_COUNT};

/// Retention pass: keep the `keep_count` most recent backups and delete
/// the rest, one at a time. Deletes are best-effort: a failure on one
/// file is recorded and the remaining deletions continue. `deleted`
/// counts successes only.
pub async fn cleanup_backups(
    credentials: Credentials,
    keep_count: Option<u32>,
    state: &ServiceState,
) -> Result<CleanupOutcome, BackupOpsError> {
    let keep_count = keep_count.unwrap_or(DEFAULT_KEEP_COUNT) as usize;

    let mut client = DriveClient::new(credentials, state.drive_endpoints().clone())?;
    let folder_id = match client.find_backup_folder().await? {
        Some(id) => id,
        None => return Ok(CleanupOutcome::default()),
    };

    // Newest first; everything past keep_count is the expired tail.
    let backups = client.list_backups(&folder_id, CLEANUP_SCAN_SIZE).await?;
    if backups.len() <= keep_count {
        return Ok(CleanupOutcome::default());
    }

    let mut outcome = CleanupOutcome::default();
    for file in &backups[keep_count..] {
        match client.delete_file(&file.id).await {
            Ok(()) => outcome.deleted += 1,
            Err(e) => {
                tracing::warn!(file_id = %file.id, name = %file.name, error = %e, "failed to delete expired backup");
                outcome.failures.push(CleanupFailure {
                    file_id: file.id.clone(),
                    name: Some(file.name.clone()),
                    error: e.to_string(),
                });
            }
        }
    }

    tracing::info!(
        deleted = outcome.deleted,
        failed = outcome.failures.len(),
        kept = keep_count.min(backups.len()),
        "backup cleanup finished"
    );
    Ok(outcome)
}
