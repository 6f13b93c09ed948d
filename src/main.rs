//! Entry point for the slova binary.

use anyhow::Result;
use clap::Parser;
use slova::cli::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file, never the terminal the game is drawing on.
    if let Some(path) = &cli.log_file {
        let log_file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    info!("Starting slova");
    let loser = slova::tui::run(cli.language).await?;
    info!(%loser, "Game over");

    Ok(())
}
