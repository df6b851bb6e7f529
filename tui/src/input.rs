//! Input handling for the Datapad TUI.
//!
//! A blocking reader task pumps crossterm events into a bounded channel; the
//! render loop drains a budgeted batch each frame and decodes it into
//! [`UiEvent`]s. Mouse movement is resolved against the previous frame's
//! [`HitRegions`], and a hover event fires only when the row under the
//! cursor changes (enter semantics, not continuous motion).

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::draw::HitRegions;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// UI-level intents decoded from terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Hover the range entry at this index (mouse enter on its row).
    Hover(usize),
    /// Move the hover selection down.
    HoverNext,
    /// Move the hover selection up.
    HoverPrevious,
    ToggleMute,
    Quit,
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Pumps terminal events from a blocking reader task into the render loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    hovered_row: Option<usize>,
}

impl InputPump {
    /// Spawn the reader task. Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));

        let reader_stop = Arc::clone(&stop);
        tokio::task::spawn_blocking(move || {
            while !reader_stop.load(Ordering::Relaxed) {
                match event::poll(INPUT_POLL_TIMEOUT) {
                    Ok(false) => {}
                    Ok(true) => match event::read() {
                        Ok(event) => {
                            // A full queue means the UI is behind; dropping
                            // input beats blocking the reader.
                            let _ = tx.try_send(InputMsg::Event(event));
                        }
                        Err(err) => {
                            let _ = tx.try_send(InputMsg::Error(err.to_string()));
                            return;
                        }
                    },
                    Err(err) => {
                        let _ = tx.try_send(InputMsg::Error(err.to_string()));
                        return;
                    }
                }
            }
        });

        Self {
            rx,
            stop,
            hovered_row: None,
        }
    }

    /// Drain up to a frame's budget of pending events into `out`.
    pub fn drain(&mut self, regions: &HitRegions, out: &mut Vec<UiEvent>) -> Result<()> {
        for _ in 0..MAX_EVENTS_PER_FRAME {
            match self.rx.try_recv() {
                Ok(InputMsg::Event(event)) => {
                    if let Some(decoded) = self.decode(&event, regions) {
                        out.push(decoded);
                    }
                }
                Ok(InputMsg::Error(message)) => {
                    return Err(anyhow!("terminal input failed: {message}"));
                }
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    return Err(anyhow!("terminal input reader stopped"));
                }
            }
        }
        Ok(())
    }

    /// Ask the reader task to exit; it notices within one poll timeout.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn decode(&mut self, event: &Event, regions: &HitRegions) -> Option<UiEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => decode_key(*key),
            Event::Mouse(mouse) => self.decode_mouse(*mouse, regions),
            _ => None,
        }
    }

    fn decode_mouse(&mut self, mouse: MouseEvent, regions: &HitRegions) -> Option<UiEvent> {
        if !matches!(mouse.kind, MouseEventKind::Moved) {
            return None;
        }

        let hit = regions.range_at(mouse.column, mouse.row);
        if hit == self.hovered_row {
            return None;
        }

        self.hovered_row = hit;
        if let Some(index) = hit {
            debug!(index, "mouse entered range row");
            return Some(UiEvent::Hover(index));
        }
        None
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.stop();
    }
}

fn decode_key(key: KeyEvent) -> Option<UiEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::HoverNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::HoverPrevious),
        KeyCode::Char('m') => Some(UiEvent::ToggleMute),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{UiEvent, decode_key};

    #[test]
    fn movement_keys_hover() {
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(UiEvent::HoverNext)
        );
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(UiEvent::HoverPrevious)
        );
    }

    #[test]
    fn quit_and_mute_keys_decode() {
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiEvent::Quit)
        );
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE)),
            Some(UiEvent::ToggleMute)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(
            decode_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }
}
