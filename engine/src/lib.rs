//! Core engine for Datapad - hover state and display orchestration.
//!
//! This crate contains the `App` hover controller and the display sequencer
//! without TUI dependencies. The UI layer reads state each frame and feeds
//! decoded input events back in; display runs execute as spawned tasks that
//! stream cards into a shared region until they complete or a newer hover
//! supersedes them.

mod app;
mod config;
mod display;
mod interaction;
mod sequencer;
mod source;

pub use app::App;
pub use config::{AppConfig, ArchiveConfig, ConfigError, DatapadConfig, DEFAULT_ARCHIVE_URL};
pub use display::{Card, SharedRegion};
pub use interaction::InteractionTracker;
pub use sequencer::{MAX_CARDS, RunOutcome, run_display};
pub use source::RecordSource;

// Re-export from crates for public API
pub use datapad_archive::{ArchiveClient, ArchiveError};
pub use datapad_types::{IdRange, InteractionId, PersonRecord, RangeParseError, Swatch};
