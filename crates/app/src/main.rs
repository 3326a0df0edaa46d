mod args;
mod op;
mod ops;
mod state;

use clap::Parser;

use args::Args;
use op::OpContext;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let ctx = match OpContext::new(args.remote) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
