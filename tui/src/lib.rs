//! TUI rendering and input handling for Datapad using ratatui.

mod chime;
mod draw;
mod input;
mod theme;

pub use chime::hover_chime;
pub use draw::{HitRegions, draw};
pub use input::{InputPump, UiEvent};
pub use theme::Palette;
