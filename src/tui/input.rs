//! Line editing over raw key events.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// How often the pump checks for key events and a closed channel.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// What a key press did to the line being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEdit {
    /// Nothing visible happened; keep reading.
    Pending,
    /// A character was appended; echo it.
    Typed(char),
    /// The last character was removed; erase it from the display.
    Erased,
    /// Enter was pressed; the line is complete.
    Submitted,
    /// Input was aborted (Ctrl+C).
    Aborted,
}

/// Applies one key press to the line under construction.
pub fn apply_key(line: &mut String, key: &KeyEvent) -> LineEdit {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return LineEdit::Aborted;
    }

    match key.code {
        KeyCode::Enter => LineEdit::Submitted,
        KeyCode::Backspace => {
            if line.pop().is_some() {
                LineEdit::Erased
            } else {
                LineEdit::Pending
            }
        }
        KeyCode::Char(c) => {
            line.push(c);
            LineEdit::Typed(c)
        }
        _ => LineEdit::Pending,
    }
}

/// Source of terminal events; lets the pump loop run against a script
/// in tests, where no terminal exists.
trait KeySource {
    /// Returns true when an event is ready within `timeout`.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Reads the next event; only called after `poll` returned true.
    fn read(&mut self) -> io::Result<Event>;
}

/// The real terminal, via crossterm.
struct TerminalSource;

impl KeySource for TerminalSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Forwards key presses from `source` until the receiver is dropped or
/// the source fails.
///
/// Polling with a short interval keeps the worker off a bare blocking
/// read, so it notices the closed channel within one interval and lets
/// the runtime shut down without waiting for one more key press.
fn pump_keys(source: &mut impl KeySource, tx: &mpsc::UnboundedSender<KeyEvent>) {
    loop {
        if tx.is_closed() {
            debug!("Key channel closed, stopping pump");
            return;
        }

        match source.poll(POLL_INTERVAL) {
            Ok(false) => {}
            Ok(true) => match source.read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if tx.send(key).is_err() {
                        debug!("Key channel closed, stopping pump");
                        return;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    debug!(%error, "Event read failed, stopping pump");
                    return;
                }
            },
            Err(error) => {
                debug!(%error, "Event poll failed, stopping pump");
                return;
            }
        }
    }
}

/// Spawns a worker that forwards key presses over a channel.
///
/// The worker polls rather than parking in a blocking read, so once
/// the console is dropped it exits on its own and process teardown is
/// not held up.
pub fn spawn_key_pump() -> mpsc::UnboundedReceiver<KeyEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || pump_keys(&mut TerminalSource, &tx));

    rx
}
