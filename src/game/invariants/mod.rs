//! Session invariants, checked in tests after every transition.

mod alternating_turn;
mod legal_words;

pub use alternating_turn::AlternatingTurnInvariant;
pub use legal_words::LegalWordsInvariant;

/// A property of the session that must hold between turns.
pub trait Invariant<S> {
    /// Returns true when the invariant holds for `session`.
    fn holds(session: &S) -> bool;

    /// Human-readable statement of the invariant.
    fn description() -> &'static str;
}
