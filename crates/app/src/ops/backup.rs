use std::path::PathBuf;

use clap::{Args, Subcommand};

use service::http_server::api::v0::backup::{BackupAction, BackupRequest};

use crate::op::{Op, OpContext};
use crate::state::AppState;

#[derive(Subcommand, Debug, Clone)]
pub enum BackupCommand {
    /// Upload a JSON snapshot file as a new backup
    Upload(Upload),
    /// List backups, newest first
    List(List),
    /// Delete backups beyond the newest N
    Cleanup(Cleanup),
}

#[derive(Args, Debug, Clone)]
pub struct Upload {
    /// Path to a JSON file holding the snapshot to back up
    #[arg(long)]
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct List {
    /// Maximum number of entries to return
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Args, Debug, Clone)]
pub struct Cleanup {
    /// Backups to retain (defaults to the server-side policy of 10)
    #[arg(long)]
    pub keep_count: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("state error: {0}")]
    State(#[from] crate::state::StateError),
    #[error("could not read snapshot file: {0}")]
    ReadSnapshot(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("api error: {0}")]
    Api(#[from] service::http_server::api::client::ApiError),
}

impl BackupCommand {
    fn action(&self) -> Result<BackupAction, BackupError> {
        match self {
            BackupCommand::Upload(args) => {
                let raw = std::fs::read_to_string(&args.file)?;
                let data: serde_json::Value = serde_json::from_str(&raw)?;
                Ok(BackupAction::Upload { data })
            }
            BackupCommand::List(args) => Ok(BackupAction::List { limit: args.limit }),
            BackupCommand::Cleanup(args) => Ok(BackupAction::Cleanup {
                keep_count: args.keep_count,
            }),
        }
    }
}

#[async_trait::async_trait]
impl Op for BackupCommand {
    type Error = BackupError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        // Credentials come from ~/.zaazu; the service never stores them
        let state = AppState::load()?;

        let request = BackupRequest {
            config: state.config.drive.credentials(),
            action: self.action()?,
        };
        let response = ctx.client.call(request).await?;

        Ok(serde_json::to_string_pretty(&response)?)
    }
}
