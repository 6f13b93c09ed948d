//! Crossterm-backed console implementation of `PlayerIo`.

use super::input::{self, LineEdit};
use super::messages;
use super::orchestrator::{GameEvent, PlayerIo};
use crate::game::engine::TurnInput;
use crate::game::types::{BaseWord, Language};
use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::debug;

/// Restores cooked mode when dropped, so a panic or an early return
/// never leaves the terminal raw.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Console collaborator: raw-mode keyboard input with live echo,
/// localized output on stdout.
///
/// Key events are pumped by a dedicated blocking worker into a channel
/// (see [`input::spawn_key_pump`]); timed reads race that channel
/// against the turn deadline with `tokio::time::timeout_at`.
pub struct ConsoleIo {
    keys: mpsc::UnboundedReceiver<KeyEvent>,
    language: Option<Language>,
    _raw: RawModeGuard,
}

impl ConsoleIo {
    /// Sets up raw mode, starts the key pump, and prints the banner.
    ///
    /// `language` preselects the session language (from the CLI),
    /// skipping the interactive prompt.
    pub fn new(language: Option<Language>) -> Result<Self> {
        let raw = RawModeGuard::new()?;
        let io = Self {
            keys: input::spawn_key_pump(),
            language,
            _raw: raw,
        };
        io.say(messages::BANNER)?;
        Ok(io)
    }

    /// The language used for rendering. English is only a placeholder
    /// until `choose_language` has run; every message after setup is
    /// rendered in the chosen language.
    fn render_language(&self) -> Language {
        self.language.unwrap_or(Language::English)
    }

    fn say(&self, line: &str) -> Result<()> {
        let mut stdout = io::stdout();
        // Raw mode disables the usual \n -> \r\n translation.
        write!(stdout, "{line}\r\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn ask(&self, prompt: &str) -> Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        Ok(())
    }

    fn echo(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }

    /// Reads one line without a deadline. Returns `None` when the key
    /// stream ends or the user aborts with Ctrl+C.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            let Some(key) = self.keys.recv().await else {
                return Ok(None);
            };
            match input::apply_key(&mut line, &key) {
                LineEdit::Pending => {}
                LineEdit::Typed(c) => self.echo(&c.to_string())?,
                LineEdit::Erased => self.echo("\u{8} \u{8}")?,
                LineEdit::Submitted => {
                    self.echo("\r\n")?;
                    return Ok(Some(line));
                }
                LineEdit::Aborted => {
                    self.echo("\r\n")?;
                    return Ok(None);
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl PlayerIo for ConsoleIo {
    async fn choose_language(&mut self) -> Result<Language> {
        if let Some(language) = self.language {
            debug!(?language, "Language preselected, skipping prompt");
            return Ok(language);
        }

        loop {
            self.ask(messages::LANGUAGE_PROMPT)?;
            let Some(line) = self.read_line().await? else {
                anyhow::bail!("input ended before a language was chosen");
            };
            match line.trim().to_lowercase().parse::<Language>() {
                Ok(language) => {
                    self.language = Some(language);
                    return Ok(language);
                }
                Err(_) => self.say(messages::LANGUAGE_RETRY)?,
            }
        }
    }

    async fn read_base_word(&mut self, language: Language) -> Result<BaseWord> {
        loop {
            self.ask(messages::base_word_prompt(language))?;
            let Some(line) = self.read_line().await? else {
                anyhow::bail!("input ended before a base word was chosen");
            };
            match BaseWord::new(&line, language) {
                Ok(word) => return Ok(word),
                Err(error) => self.say(messages::base_word_error(language, error))?,
            }
        }
    }

    async fn read_word(&mut self, remaining: Duration) -> Result<TurnInput> {
        let deadline = Instant::now() + remaining;
        let mut line = String::new();

        loop {
            // Bind the race result first so the receiver borrow ends
            // before any echoing below.
            let raced = tokio::time::timeout_at(deadline, self.keys.recv()).await;
            let key = match raced {
                Ok(Some(key)) => key,
                // Key stream ended: same as silence.
                Ok(None) => return Ok(TurnInput::NoInput),
                // Deadline elapsed mid-line; the typed prefix is void.
                Err(_) => {
                    self.echo("\r\n")?;
                    return Ok(TurnInput::NoInput);
                }
            };

            match input::apply_key(&mut line, &key) {
                LineEdit::Pending => {}
                LineEdit::Typed(c) => self.echo(&c.to_string())?,
                LineEdit::Erased => self.echo("\u{8} \u{8}")?,
                LineEdit::Submitted => {
                    self.echo("\r\n")?;
                    return Ok(TurnInput::Line(line));
                }
                LineEdit::Aborted => {
                    self.echo("\r\n")?;
                    return Ok(TurnInput::NoInput);
                }
            }
        }
    }

    async fn notify(&mut self, event: &GameEvent) -> Result<()> {
        self.say(&messages::event_text(self.render_language(), event))
    }

    async fn wait_for_exit(&mut self) -> Result<()> {
        self.say(messages::press_enter_to_exit(self.render_language()))?;
        let _ = self.read_line().await?;
        Ok(())
    }
}
