//! Terminal front end: console I/O, localization, and the turn loop driver.

mod console;
mod input;
mod messages;
mod orchestrator;

pub use console::ConsoleIo;
pub use orchestrator::{GameEvent, Orchestrator, PlayerIo};

use crate::game::types::{Language, Player};
use anyhow::Result;
use tracing::info;

/// Runs one full game session on the terminal and returns the loser.
pub async fn run(language: Option<Language>) -> Result<Player> {
    let io = ConsoleIo::new(language)?;
    let mut orchestrator = Orchestrator::new(io);
    let loser = orchestrator.run().await?;
    info!(%loser, "Session finished");
    Ok(loser)
}
