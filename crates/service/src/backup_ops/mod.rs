mod cleanup_backups;
mod delete_backup;
mod download_backup;
mod error;
mod exchange_auth_code;
mod list_backups;
mod types;
mod upload_backup;

// Re-export types
pub use error::BackupOpsError;
pub use types::{CleanupFailure, CleanupOutcome, UploadOutcome};

// Re-export functions
pub use cleanup_backups::cleanup_backups;
pub use delete_backup::delete_backup;
pub use download_backup::download_backup;
pub use exchange_auth_code::exchange_auth_code;
pub use list_backups::list_backups;
pub use upload_backup::upload_backup;

/// Page size for interactive listing.
pub const LIST_PAGE_SIZE: u32 = 20;
/// Page size for the cleanup scan.
pub const CLEANUP_SCAN_SIZE: u32 = 100;
/// Backups retained by cleanup when the caller does not say otherwise.
pub const DEFAULT_KEEP_COUNT: u32 = 10;
