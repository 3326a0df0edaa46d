use clap::Parser;
use url::Url;

use crate::ops::Command;

#[derive(Parser, Debug)]
#[command(name = "zaazu", version, about = "Operator CLI for the Zaazu admin backend")]
pub struct Args {
    /// Base URL of a running service instance
    #[arg(long, default_value = "http://localhost:3000")]
    pub remote: Url,

    #[command(subcommand)]
    pub command: Command,
}
