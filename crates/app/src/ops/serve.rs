use clap::Args;

use service::{spawn_service, ServiceConfig};

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Serve;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Serve {
    type Error = ServeError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        // Load state from ~/.zaazu
        let state = AppState::load()?;

        // Build service config with persistent paths
        let config = ServiceConfig {
            http_listen_addr: state.config.listen_addr.parse().ok(),
            sqlite_path: Some(state.db_path),
            thumbnail_root: Some(state.thumbnails_path),
            drive_endpoints: Default::default(),
            log_level: tracing::Level::INFO,
        };

        spawn_service(&config).await;
        Ok("service ended".to_string())
    }
}
