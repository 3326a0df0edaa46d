use clap::Args;

use crate::state::AppState;

#[derive(Args, Debug, Clone)]
pub struct Init;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::init()?;
        Ok(format!(
            "initialized {} (fill in the [drive] section of {})",
            state.zaazu_dir.display(),
            state.config_path.display()
        ))
    }
}
