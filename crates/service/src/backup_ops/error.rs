use crate::drive::DriveError;

#[derive(Debug, thiserror::Error)]
pub enum BackupOpsError {
    #[error("backup payload must be a JSON object")]
    PayloadNotAnObject,
    #[error("failed to serialize backup payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Drive(#[from] DriveError),
}

impl BackupOpsError {
    pub fn is_validation(&self) -> bool {
        match self {
            BackupOpsError::PayloadNotAnObject => true,
            BackupOpsError::Serialize(_) => false,
            BackupOpsError::Drive(e) => e.is_validation(),
        }
    }
}
