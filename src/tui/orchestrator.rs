//! Drives the turn loop between the engine and a `PlayerIo` collaborator.

use crate::game::engine::{Rejection, Session, TurnInput, TurnTransition};
use crate::game::types::{BaseWord, Language, Player, TURN_TIMEOUT};
use anyhow::Result;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Messages sent to the presentation layer for localized rendering.
///
/// The presentation owns all text and formatting; the driver only
/// reports what happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The session is set up and play begins.
    GameStart,
    /// A player's turn began with a fresh deadline.
    TurnStarted(Player),
    /// A word was accepted; play passes to `next`.
    Accepted {
        /// The accepted word, normalized.
        word: String,
        /// The player whose turn begins.
        next: Player,
    },
    /// A submission was rejected; the same turn continues.
    Rejected(Rejection),
    /// The turn deadline passed; `loser` ran out of time.
    TimedOut {
        /// The player who lost on time.
        loser: Player,
    },
    /// The session is over.
    GameOver,
}

/// Terminal collaborator the orchestrator plays through.
///
/// Implementations own presentation entirely: prompting, echoing,
/// message text, and locale selection.
#[async_trait::async_trait]
pub trait PlayerIo: Send {
    /// Prompts until the user picks a supported language.
    async fn choose_language(&mut self) -> Result<Language>;

    /// Prompts until a valid base word is entered; the returned word
    /// has already passed length and alphabet checks.
    async fn read_base_word(&mut self, language: Language) -> Result<BaseWord>;

    /// Reads one line of input, racing `remaining` time left on the
    /// turn clock. Returns [`TurnInput::NoInput`] when the deadline
    /// passes or the input stream ends.
    async fn read_word(&mut self, remaining: Duration) -> Result<TurnInput>;

    /// Reports an outcome for localized rendering. Purely
    /// observational; nothing is read back.
    async fn notify(&mut self, event: &GameEvent) -> Result<()>;

    /// Blocks until the user acknowledges the end of the game.
    async fn wait_for_exit(&mut self) -> Result<()>;
}

/// Orchestrates a full session between the engine and the terminal.
pub struct Orchestrator<Io> {
    io: Io,
}

impl<Io: PlayerIo> Orchestrator<Io> {
    /// Creates a new orchestrator over the given collaborator.
    pub fn new(io: Io) -> Self {
        Self { io }
    }

    /// Returns the collaborator.
    pub fn io(&self) -> &Io {
        &self.io
    }

    /// Runs one session to completion and returns the losing player.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Player> {
        let language = self.io.choose_language().await?;
        let base_word = self.io.read_base_word(language).await?;
        info!(%base_word, ?language, "Session configured");

        let mut session = Session::new(base_word, language);
        self.io.notify(&GameEvent::GameStart).await?;

        loop {
            self.io
                .notify(&GameEvent::TurnStarted(session.current_player()))
                .await?;
            let turn_start = Instant::now();

            // One deadline per turn; rejected attempts keep the clock.
            session = 'turn: loop {
                let remaining = TURN_TIMEOUT.saturating_sub(turn_start.elapsed());
                let input = if remaining.is_zero() {
                    TurnInput::NoInput
                } else {
                    // A failed read is treated like silence: no valid
                    // word arrived in time.
                    match self.io.read_word(remaining).await {
                        Ok(input) => input,
                        Err(error) => {
                            warn!(%error, "Read failed, treating as no input");
                            TurnInput::NoInput
                        }
                    }
                };

                match session.submit(input, turn_start.elapsed()) {
                    TurnTransition::Accepted {
                        session,
                        word,
                        next,
                    } => {
                        debug!(%word, %next, "Word accepted");
                        self.io.notify(&GameEvent::Accepted { word, next }).await?;
                        break 'turn session;
                    }
                    TurnTransition::Rejected {
                        session: unchanged,
                        reason,
                    } => {
                        debug!(?reason, "Submission rejected");
                        self.io.notify(&GameEvent::Rejected(reason)).await?;
                        session = unchanged;
                    }
                    TurnTransition::TimedOut(over) => {
                        let loser = over.loser();
                        info!(%loser, words_played = over.history().len(), "Time ran out");
                        self.io.notify(&GameEvent::TimedOut { loser }).await?;
                        self.io.notify(&GameEvent::GameOver).await?;
                        self.io.wait_for_exit().await?;
                        return Ok(loser);
                    }
                }
            };
        }
    }
}
