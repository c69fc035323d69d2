// dqdash/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug dqdash summary ... to see fetch timings
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_dir = cli.project_dir;

    match cli.command {
        Commands::Summary { selection, rows } => {
            commands::summary::execute(&project_dir, selection, rows).await
        }
        Commands::Options => commands::options::execute(&project_dir).await,
        Commands::Render { selection, out } => {
            commands::render::execute(&project_dir, selection, out).await
        }
        Commands::Explore => commands::explore::execute(&project_dir).await,
    }
}
