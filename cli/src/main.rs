//! Datapad CLI - binary entry point and terminal session management.
//!
//! # Event Loop
//!
//! The binary bridges [`datapad_engine`] (application state) and
//! [`datapad_tui`] (rendering) behind an RAII terminal session:
//!
//! 1. Wait for the frame tick
//! 2. Drain the input queue (non-blocking via [`datapad_tui::InputPump`])
//! 3. Apply decoded events to the `App` (hovers spawn display runs)
//! 4. Sound the hover chime if one was requested
//! 5. Render the frame
//!
//! Logs go to a file, never to stdout/stderr: while the TUI owns the
//! terminal, stray writes would corrupt the display.

use std::fs::{self, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use url::Url;

use datapad_archive::ArchiveClient;
use datapad_engine::{App, DatapadConfig};
use datapad_tui::{HitRegions, InputPump, Palette, UiEvent, draw, hover_chime};

const FRAME_INTERVAL: Duration = Duration::from_millis(33); // ~30 FPS, plenty for card streaming

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    if let Some((path, file)) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %path.display(), "Logging initialized");
        return;
    }

    // Without a usable log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> Option<(PathBuf, std::fs::File)> {
    let path = dirs::home_dir()?
        .join(".datapad")
        .join("logs")
        .join("datapad.log");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
    Some((path, file))
}

/// Raw-mode terminal with guaranteed restore on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter the alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .context("failed to build the terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = DatapadConfig::load().unwrap_or_else(|err| {
        tracing::warn!(path = %err.path().display(), %err, "falling back to default config");
        DatapadConfig::default()
    });

    let base_url = Url::parse(config.base_url())
        .with_context(|| format!("invalid archive base URL: {}", config.base_url()))?;
    let client = ArchiveClient::new(base_url)?;

    let mut app = App::new(client, &config);
    let palette = Palette::new(config.high_contrast());

    let mut session = TerminalSession::new()?;
    let mut pump = InputPump::spawn();
    let mut regions = HitRegions::default();
    let mut events = Vec::new();
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);

    loop {
        ticker.tick().await;

        events.clear();
        pump.drain(&regions, &mut events)?;

        let mut quit = false;
        for event in &events {
            match event {
                UiEvent::Quit => quit = true,
                UiEvent::Hover(index) => app.hover(*index),
                UiEvent::HoverNext => app.hover_next(),
                UiEvent::HoverPrevious => app.hover_previous(),
                UiEvent::ToggleMute => app.toggle_mute(),
            }
        }

        if app.take_chime() {
            hover_chime();
        }

        session
            .terminal
            .draw(|frame| draw(frame, &app, &palette, &mut regions))?;

        if quit {
            break;
        }
    }

    pump.stop();
    Ok(())
}
