use axum::routing::{get, post};
use axum::Router;

use crate::ServiceState;

pub mod create;
pub mod describe;
pub mod list;

// Re-export for convenience
pub use create::{CreateLogRequest, CreateLogResponse};
pub use list::LogEventInfo;

pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/", post(create::handler).get(describe::handler))
        .route("/recent", get(list::handler))
        .with_state(state)
}
