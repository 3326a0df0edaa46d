mod client;
mod error;
mod types;

pub use client::{DriveClient, BACKUP_FILE_PREFIX, BACKUP_FOLDER_NAME};
pub use error::DriveError;
pub use types::{BackupFile, Credentials, DriveEndpoints, TokenGrant};
