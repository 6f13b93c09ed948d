//! Legal words invariant: the session never records an invalid word.

use super::Invariant;
use crate::game::engine::{AwaitingInput, Session};
use crate::game::validator;

/// Invariant: every word in history passed both validation checks and
/// is tracked in the used-words set.
///
/// The used set and history stay the same size, so no accepted word
/// was ever a duplicate.
pub struct LegalWordsInvariant;

impl Invariant<Session<AwaitingInput>> for LegalWordsInvariant {
    fn holds(session: &Session<AwaitingInput>) -> bool {
        if session.used_words().len() != session.history().len() {
            return false;
        }

        session.history().iter().all(|played| {
            session.used_words().contains(&played.word)
                && validator::fits_alphabet(&played.word, session.language())
                && validator::can_form_from(&played.word, session.base_word().as_str())
        })
    }

    fn description() -> &'static str {
        "every accepted word is alphabet-valid, formable, unique, and tracked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::{TurnInput, TurnTransition};
    use crate::game::types::{BaseWord, Language};
    use std::time::Duration;

    fn new_session() -> Session<AwaitingInput> {
        let base = BaseWord::new("elephants", Language::English).expect("valid base word");
        Session::new(base, Language::English)
    }

    fn play(session: Session<AwaitingInput>, word: &str) -> Session<AwaitingInput> {
        match session.submit(TurnInput::Line(word.to_string()), Duration::from_secs(1)) {
            TurnTransition::Accepted { session, .. } => session,
            TurnTransition::Rejected { session, .. } => session,
            TurnTransition::TimedOut(_) => panic!("unexpected timeout"),
        }
    }

    #[test]
    fn fresh_session_holds() {
        assert!(LegalWordsInvariant::holds(&new_session()));
    }

    #[test]
    fn holds_through_a_mixed_script() {
        let mut session = new_session();
        for word in ["pants", "w0rd", "heel", "sells", "", "pants", "植物"] {
            session = play(session, word);
            assert!(LegalWordsInvariant::holds(&session));
        }
        assert_eq!(session.history().len(), 2);
    }
}
