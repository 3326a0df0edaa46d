use axum::routing::post;
use axum::Router;

use crate::ServiceState;

pub mod dispatch;

// Re-export for convenience
pub use dispatch::{
    AuthResponse, BackupAction, BackupRequest, CleanupResponse, DeleteResponse, DownloadResponse,
    UploadResponse,
};

pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/", post(dispatch::handler))
        .with_state(state)
}
