//! All user-facing text, in Russian and English.
//!
//! The core never formats messages; everything a player reads is
//! selected here from the session language.

use super::orchestrator::GameEvent;
use crate::game::engine::Rejection;
use crate::game::types::{BaseWordError, Language};

/// Shown once at startup, before a language is chosen.
pub const BANNER: &str = "=== Игра «Слова» / The Words Game ===";

/// Language prompt; speaks both languages since none is chosen yet.
pub const LANGUAGE_PROMPT: &str = "Выберите язык / Choose language (ru/en): ";

/// Reprompt after an unrecognized language choice.
pub const LANGUAGE_RETRY: &str = "Пожалуйста, введите 'ru' или 'en' / Please enter 'ru' or 'en'.";

/// Prompt for the shared base word.
pub fn base_word_prompt(language: Language) -> &'static str {
    match language {
        Language::Russian => "Введите базовое слово (8–30 букв): ",
        Language::English => "Enter the base word (8-30 letters): ",
    }
}

/// Explains why a base word was rejected.
pub fn base_word_error(language: Language, error: BaseWordError) -> &'static str {
    match (language, error) {
        (Language::Russian, BaseWordError::TooShort) => {
            "Слово слишком короткое: нужно не меньше 8 букв."
        }
        (Language::Russian, BaseWordError::TooLong) => {
            "Слово слишком длинное: нужно не больше 30 букв."
        }
        (Language::Russian, BaseWordError::WrongAlphabet) => {
            "Слово содержит недопустимые символы."
        }
        (Language::English, BaseWordError::TooShort) => {
            "The word is too short: at least 8 letters are required."
        }
        (Language::English, BaseWordError::TooLong) => {
            "The word is too long: at most 30 letters are allowed."
        }
        (Language::English, BaseWordError::WrongAlphabet) => {
            "The word contains characters outside the alphabet."
        }
    }
}

/// Final prompt before the process exits.
pub fn press_enter_to_exit(language: Language) -> &'static str {
    match language {
        Language::Russian => "Нажмите Enter, чтобы выйти.",
        Language::English => "Press Enter to exit.",
    }
}

/// Renders a game event in the session language.
pub fn event_text(language: Language, event: &GameEvent) -> String {
    match language {
        Language::Russian => match event {
            GameEvent::GameStart => {
                "Игра началась! Составляйте слова из букв базового слова.".to_string()
            }
            GameEvent::TurnStarted(player) => {
                format!("Ход игрока {player}. На ход даётся 10 секунд:")
            }
            GameEvent::Accepted { word, next } => {
                format!("Слово «{word}» принято. Ход переходит к игроку {next}.")
            }
            GameEvent::Rejected(reason) => match reason {
                Rejection::Empty => "Пустой ввод, попробуйте ещё раз.".to_string(),
                Rejection::WrongAlphabet => "Слово содержит недопустимые символы.".to_string(),
                Rejection::AlreadyUsed => "Это слово уже использовано.".to_string(),
                Rejection::CannotForm => {
                    "Это слово нельзя составить из букв базового слова.".to_string()
                }
            },
            GameEvent::TimedOut { loser } => {
                format!("Время вышло! Игрок {loser} проиграл.")
            }
            GameEvent::GameOver => "Игра окончена.".to_string(),
        },
        Language::English => match event {
            GameEvent::GameStart => {
                "The game begins! Build words from the letters of the base word.".to_string()
            }
            GameEvent::TurnStarted(player) => {
                format!("Player {player}'s turn. You have 10 seconds:")
            }
            GameEvent::Accepted { word, next } => {
                format!("The word \"{word}\" is accepted. Player {next} is up.")
            }
            GameEvent::Rejected(reason) => match reason {
                Rejection::Empty => "Empty input, try again.".to_string(),
                Rejection::WrongAlphabet => {
                    "The word contains characters outside the alphabet.".to_string()
                }
                Rejection::AlreadyUsed => "That word has already been used.".to_string(),
                Rejection::CannotForm => {
                    "That word cannot be built from the base word's letters.".to_string()
                }
            },
            GameEvent::TimedOut { loser } => {
                format!("Time is up! Player {loser} loses.")
            }
            GameEvent::GameOver => "Game over.".to_string(),
        },
    }
}
