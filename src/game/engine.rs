//! Typestate turn engine for the word duel.
//!
//! The session phase is encoded in the type parameter, so a finished
//! game cannot accept further submissions and the loser can only be
//! asked for once the game is actually over.

use super::types::{BaseWord, Language, PlayedWord, Player, TURN_TIMEOUT};
use super::validator;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::instrument;

/// Typestate marker: a turn is underway and input is expected.
#[derive(Debug, Clone, Copy)]
pub struct AwaitingInput;

/// Typestate marker: the game ended on a timeout.
#[derive(Debug, Clone, Copy)]
pub struct GameOver;

/// Raw per-turn input handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// A line of text arrived before the deadline.
    Line(String),
    /// Nothing arrived: timeout, end of stream, or a failed read.
    NoInput,
}

/// Why a submission was rejected. All of these are expected game flow,
/// not errors; the turn continues and the deadline keeps counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Nothing left after trimming whitespace.
    Empty,
    /// A character fell outside the session language's alphabet.
    WrongAlphabet,
    /// The word was already played this session.
    AlreadyUsed,
    /// The base word does not carry enough of the required letters.
    CannotForm,
}

/// Game session with typestate phase encoding.
///
/// The type parameter `S` encodes the phase:
/// - `Session<AwaitingInput>` - a turn is running, submissions accepted
/// - `Session<GameOver>` - terminal, reached only through a timeout
///
/// Invalid operations are prevented at compile time:
/// - `Session<GameOver>` has no `submit()` method
/// - `Session<AwaitingInput>` has no `loser()` method
#[derive(Debug, Clone)]
pub struct Session<S> {
    language: Language,
    base_word: BaseWord,
    used_words: HashSet<String>,
    history: Vec<PlayedWord>,
    current: Player,
    loser: Option<Player>,
    _phase: PhantomData<S>,
}

/// Result of submitting one input - explicit state transition.
#[derive(Debug)]
pub enum TurnTransition {
    /// Word accepted; play passes to `next` with a fresh deadline.
    Accepted {
        /// The session, now on the other player's turn.
        session: Session<AwaitingInput>,
        /// The normalized word that was accepted.
        word: String,
        /// The player whose turn begins.
        next: Player,
    },
    /// Submission rejected; the same player keeps the turn and the
    /// remaining time keeps counting down.
    Rejected {
        /// The session, unchanged except for having seen the attempt.
        session: Session<AwaitingInput>,
        /// Why the submission was rejected.
        reason: Rejection,
    },
    /// The deadline passed or input ended; the game is over.
    TimedOut(Session<GameOver>),
}

// ─────────────────────────────────────────────────────────────
//  Constructor - always starts AwaitingInput, player 1 to move
// ─────────────────────────────────────────────────────────────

impl Session<AwaitingInput> {
    /// Creates a new session over `base_word` with player 1 to move.
    #[instrument(skip_all, fields(base_word = %base_word, language = ?language))]
    pub fn new(base_word: BaseWord, language: Language) -> Self {
        Self {
            language,
            base_word,
            used_words: HashSet::new(),
            history: Vec::new(),
            current: Player::One,
            loser: None,
            _phase: PhantomData,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Only AwaitingInput can accept submissions (consuming transition)
// ─────────────────────────────────────────────────────────────

impl Session<AwaitingInput> {
    /// Processes one submission, consuming the session and returning
    /// the next state.
    ///
    /// `elapsed` is the wall-clock time since the turn started. The
    /// checks run in a fixed order: deadline, presence of input,
    /// emptiness, alphabet, reuse, letter availability. Only a fully
    /// valid word advances the game; every rejection leaves the same
    /// player on the clock.
    #[instrument(skip_all, fields(player = %self.current, elapsed_ms = elapsed.as_millis() as u64))]
    pub fn submit(mut self, input: TurnInput, elapsed: Duration) -> TurnTransition {
        // Hard wall-clock deadline: even a word that arrived is void
        // once the turn's time is spent.
        if elapsed >= TURN_TIMEOUT {
            return TurnTransition::TimedOut(self.into_game_over());
        }

        let line = match input {
            TurnInput::Line(line) => line,
            TurnInput::NoInput => return TurnTransition::TimedOut(self.into_game_over()),
        };

        let word = line.trim().to_lowercase();
        if word.is_empty() {
            return self.reject(Rejection::Empty);
        }
        if !validator::fits_alphabet(&word, self.language) {
            return self.reject(Rejection::WrongAlphabet);
        }
        if self.used_words.contains(&word) {
            return self.reject(Rejection::AlreadyUsed);
        }
        if !validator::can_form_from(&word, self.base_word.as_str()) {
            return self.reject(Rejection::CannotForm);
        }

        self.used_words.insert(word.clone());
        self.history.push(PlayedWord {
            player: self.current,
            word: word.clone(),
        });
        let next = self.current.opponent();
        self.current = next;

        TurnTransition::Accepted {
            session: self,
            word,
            next,
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    fn reject(self, reason: Rejection) -> TurnTransition {
        TurnTransition::Rejected {
            session: self,
            reason,
        }
    }

    fn into_game_over(self) -> Session<GameOver> {
        Session {
            language: self.language,
            base_word: self.base_word,
            used_words: self.used_words,
            history: self.history,
            current: self.current,
            loser: Some(self.current),
            _phase: PhantomData::<GameOver>,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available in all phases
// ─────────────────────────────────────────────────────────────

impl<S> Session<S> {
    /// Returns the session language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the base word.
    pub fn base_word(&self) -> &BaseWord {
        &self.base_word
    }

    /// Returns the set of words accepted so far.
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    /// Returns the accepted words in play order.
    pub fn history(&self) -> &[PlayedWord] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  GameOver state - has loser() method
// ─────────────────────────────────────────────────────────────

impl Session<GameOver> {
    /// Returns the player who ran out of time.
    ///
    /// This method only exists on `Session<GameOver>`, providing a
    /// compile-time guarantee that a loser exists.
    pub fn loser(&self) -> Player {
        self.loser.expect("finished session must record a loser")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(base: &str, language: Language) -> Session<AwaitingInput> {
        let base_word = BaseWord::new(base, language).expect("valid base word");
        Session::new(base_word, language)
    }

    fn submit(s: Session<AwaitingInput>, line: &str) -> TurnTransition {
        s.submit(TurnInput::Line(line.to_string()), Duration::from_secs(1))
    }

    fn accept(s: Session<AwaitingInput>, line: &str) -> Session<AwaitingInput> {
        match submit(s, line) {
            TurnTransition::Accepted { session, .. } => session,
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn accepts_a_formable_word_and_toggles_player() {
        let s = session("строитель", Language::Russian);
        match submit(s, "соль") {
            TurnTransition::Accepted {
                session,
                word,
                next,
            } => {
                assert_eq!(word, "соль");
                assert_eq!(next, Player::Two);
                assert_eq!(session.current_player(), Player::Two);
                assert!(session.used_words().contains("соль"));
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn normalizes_case_and_whitespace_before_checking() {
        let s = session("elephants", Language::English);
        match submit(s, "  PANTS  ") {
            TurnTransition::Accepted { word, .. } => assert_eq!(word, "pants"),
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn rejections_keep_the_player_and_the_used_set() {
        let s = session("elephants", Language::English);
        let cases = [
            ("   ", Rejection::Empty),
            ("w0rd", Rejection::WrongAlphabet),
            ("sells", Rejection::CannotForm),
        ];

        let mut s = s;
        for (line, expected) in cases {
            match submit(s, line) {
                TurnTransition::Rejected { session, reason } => {
                    assert_eq!(reason, expected);
                    assert_eq!(session.current_player(), Player::One);
                    assert!(session.used_words().is_empty());
                    s = session;
                }
                other => panic!("expected rejection, got {other:?}"),
            }
        }
    }

    #[test]
    fn a_word_can_only_be_accepted_once() {
        let s = session("elephants", Language::English);
        let s = accept(s, "pants");
        match submit(s, "pants") {
            TurnTransition::Rejected { reason, .. } => {
                assert_eq!(reason, Rejection::AlreadyUsed);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn reuse_is_checked_before_formability() {
        // "pants" stays used even though it is also still formable;
        // the reuse check fires first.
        let s = session("elephants", Language::English);
        let s = accept(s, "pants");
        let s = accept(s, "heel");
        match submit(s, "PANTS") {
            TurnTransition::Rejected { reason, .. } => {
                assert_eq!(reason, Rejection::AlreadyUsed);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn deadline_voids_even_a_valid_word() {
        let s = session("elephants", Language::English);
        match s.submit(TurnInput::Line("pants".into()), TURN_TIMEOUT) {
            TurnTransition::TimedOut(over) => assert_eq!(over.loser(), Player::One),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn missing_input_ends_the_game() {
        let s = session("elephants", Language::English);
        let s = accept(s, "pants");
        match s.submit(TurnInput::NoInput, Duration::from_secs(3)) {
            TurnTransition::TimedOut(over) => {
                // Player 2 was on the clock after the first acceptance.
                assert_eq!(over.loser(), Player::Two);
                assert_eq!(over.history().len(), 1);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn players_strictly_alternate_across_acceptances() {
        let mut s = session("строитель", Language::Russian);
        let words = ["соль", "рост", "тело", "лист"];
        for (i, word) in words.iter().enumerate() {
            assert_eq!(
                s.current_player(),
                if i % 2 == 0 { Player::One } else { Player::Two }
            );
            s = accept(s, word);
        }
        assert_eq!(s.history().len(), words.len());
        assert_eq!(s.used_words().len(), words.len());
    }
}
