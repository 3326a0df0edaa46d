use serde::{Deserialize, Serialize};

/// Result of writing one backup file.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    pub file_id: String,
    pub file_name: String,
    /// Serialized size as `"<KB> KB"` with two decimals.
    pub size_label: String,
}

/// Result of a best-effort retention pass. `deleted` counts successful
/// deletions only; per-item failures are reported, not fatal.
#[derive(Debug, Clone, Default)]
pub struct CleanupOutcome {
    pub deleted: usize,
    pub failures: Vec<CleanupFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupFailure {
    pub file_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub error: String,
}
