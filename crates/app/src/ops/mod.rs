mod backup;
mod init;
mod serve;
mod version;

use clap::Subcommand;

use crate::op::{Op, OpContext};

pub use backup::BackupCommand;
pub use init::Init;
pub use serve::Serve;
pub use version::Version;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Initialize the ~/.zaazu state directory
    Init(Init),
    /// Run the admin backend service
    Serve(Serve),
    /// Drive backup actions against a running service
    #[command(subcommand)]
    Backup(BackupCommand),
    /// Print version information
    Version(Version),
}

impl Command {
    pub async fn execute(&self, ctx: &OpContext) -> Result<String, anyhow::Error> {
        match self {
            Command::Init(op) => Ok(op.execute(ctx).await?),
            Command::Serve(op) => Ok(op.execute(ctx).await?),
            Command::Backup(op) => Ok(op.execute(ctx).await?),
            Command::Version(op) => Ok(op.execute(ctx).await?),
        }
    }
}
