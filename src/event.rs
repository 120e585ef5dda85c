use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;

use crate::session::input::KeyInput;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// The terminal stopped delivering events.
    Closed,
}

/// Reads terminal events on a background thread. `next` is the only place
/// the main loop blocks.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let event = match event::read() {
                    Ok(Event::Key(key)) => AppEvent::Key(key),
                    Ok(Event::Resize(_, _)) => AppEvent::Resize,
                    Ok(_) => continue,
                    Err(err) => {
                        warn!("terminal event read failed: {err}");
                        let _ = tx.send(AppEvent::Closed);
                        return;
                    }
                };
                if tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a raw key press to a session input. Releases, repeats and keys with
/// no meaning for a typing test yield `None`.
pub fn classify(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => Some(KeyInput::Abort),
        KeyCode::Char('r') if ctrl => Some(KeyInput::Restart),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(ch) if !ch.is_control() => Some(KeyInput::Char(ch)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Next),
        KeyCode::Esc => Some(KeyInput::Quit),
        _ => None,
    }
}
