//! Slova - a timed two-player word-building duel for the terminal.
//!
//! Two players share a base word and take turns typing words assembled
//! from its letters, each letter usable only as many times as it
//! appears in the base word. Every turn runs against a 10 second
//! clock; invalid attempts keep the clock running, and the first
//! player to run out of time loses.
//!
//! # Architecture
//!
//! - **game**: pure validation and the typestate turn engine
//! - **tui**: crossterm console front end and the session driver
//!
//! # Example
//!
//! ```
//! use slova::{BaseWord, Language, Session, TurnInput, TurnTransition};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), slova::BaseWordError> {
//! let base = BaseWord::new("elephants", Language::English)?;
//! let session = Session::new(base, Language::English);
//!
//! match session.submit(TurnInput::Line("pants".into()), Duration::from_secs(2)) {
//!     TurnTransition::Accepted { word, .. } => assert_eq!(word, "pants"),
//!     other => panic!("unexpected transition: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod game;
pub mod tui;

// Crate-level exports - turn engine
pub use game::engine::{AwaitingInput, GameOver, Rejection, Session, TurnInput, TurnTransition};

// Crate-level exports - domain types
pub use game::types::{BaseWord, BaseWordError, Language, PlayedWord, Player, TURN_TIMEOUT};

// Crate-level exports - pure validation
pub use game::validator::{can_form_from, fits_alphabet};

// Crate-level exports - terminal front end
pub use tui::{ConsoleIo, GameEvent, Orchestrator, PlayerIo};
