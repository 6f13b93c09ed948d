//! Core domain types for the word duel.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::validator;

/// How long each player has to produce a valid word. The window covers
/// the whole turn: rejected attempts do not reset it.
pub const TURN_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Session language; decides the accepted alphabet and all message text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Language {
    /// Russian: 'а'..='я' plus 'ё'.
    #[strum(serialize = "ru")]
    Russian,
    /// English: 'a'..='z'.
    #[strum(serialize = "en")]
    English,
}

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1 (goes first).
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// Errors that can occur when constructing a base word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BaseWordError {
    /// Fewer than 8 letters after trimming.
    #[display("base word must have at least 8 letters")]
    TooShort,
    /// More than 30 letters.
    #[display("base word must have at most 30 letters")]
    TooLong,
    /// Contains characters outside the chosen alphabet.
    #[display("base word contains characters outside the chosen alphabet")]
    WrongAlphabet,
}

/// The shared source word whose letters (with multiplicity) bound which
/// words may be played. Immutable for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseWord(String);

impl BaseWord {
    /// Normalizes raw input (trim, lowercase) and validates it as a base
    /// word: 8–30 letters, all from `language`'s alphabet.
    ///
    /// # Errors
    ///
    /// Returns a [`BaseWordError`] describing the first failed check.
    pub fn new(input: &str, language: Language) -> Result<Self, BaseWordError> {
        let word = input.trim().to_lowercase();
        let letters = word.chars().count();

        if letters < 8 {
            return Err(BaseWordError::TooShort);
        }
        if letters > 30 {
            return Err(BaseWordError::TooLong);
        }
        if !validator::fits_alphabet(&word, language) {
            return Err(BaseWordError::WrongAlphabet);
        }

        Ok(Self(word))
    }

    /// Returns the base word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BaseWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One accepted word, recorded in session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedWord {
    /// Who played the word.
    pub player: Player,
    /// The word, normalized (trimmed, lowercase).
    pub word: String,
}
