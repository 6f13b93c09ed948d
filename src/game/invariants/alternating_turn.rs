//! Alternating turn invariant: play alternates 1, 2, 1, 2, ...

use super::Invariant;
use crate::game::engine::{AwaitingInput, Session};
use crate::game::types::Player;

/// Invariant: players alternate on accepted words.
///
/// History must show the 1, 2, 1, 2, ... pattern, starting with
/// player 1, and the player on the clock must be the expected next.
pub struct AlternatingTurnInvariant;

impl Invariant<Session<AwaitingInput>> for AlternatingTurnInvariant {
    fn holds(session: &Session<AwaitingInput>) -> bool {
        let history = session.history();

        if history.is_empty() {
            return session.current_player() == Player::One;
        }

        // First word is always played by player 1
        if history[0].player != Player::One {
            return false;
        }

        // Check alternation
        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        // Current player must be the expected next
        let expected_next = if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        session.current_player() == expected_next
    }

    fn description() -> &'static str {
        "players alternate on accepted words (1, 2, 1, 2, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::engine::{TurnInput, TurnTransition};
    use crate::game::types::{BaseWord, Language};
    use std::time::Duration;

    fn new_session() -> Session<AwaitingInput> {
        let base = BaseWord::new("строитель", Language::Russian).expect("valid base word");
        Session::new(base, Language::Russian)
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
        assert!(AlternatingTurnInvariant::holds(&new_session()));
    }

    #[test]
    fn holds_after_each_acceptance() {
        let mut session = new_session();
        for word in ["соль", "рост", "тело"] {
            session = play(session, word);
            assert!(AlternatingTurnInvariant::holds(&session));
        }
    }

    #[test]
    fn holds_across_rejections() {
        let mut session = new_session();
        session = play(session, "соль");
        // Rejected attempts must not disturb the alternation.
        session = play(session, "соль");
        session = play(session, "xyz");
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::Two);
    }
}
