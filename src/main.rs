// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Album catalog TUI.
//!
//! A terminal client for browsing and editing the albums held by a music
//! catalog service.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Task Worker** performs every request to the catalog service and
//!   posts the results back as events.
//! * **Event Loops** capture user input, system ticks and bus signals to
//!   drive the UI state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod api;
mod cli;
mod commander;
mod components;
mod config;
mod events;
mod model;
mod render;
mod signals;
mod tasks;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, File},
    io::{self},
    path::Path,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{
    api::HttpCatalogApi,
    cli::Cli,
    commander::Commander,
    components::{AlbumEditor, AlbumListView},
    config::AppConfig,
    events::{AppEvent, process_events},
    signals::SignalBus,
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub bus: SignalBus,

    pub album_list: AlbumListView,
    pub editor: Option<AlbumEditor>,

    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>, bus: SignalBus) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            bus,
            album_list: AlbumListView::new(),
            editor: None,
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(config::load_config());

    init_logging(&config.log_path()).context("Failed to initialise logging")?;
    info!(api_url = %config.api_url, "starting albumui");

    let api = HttpCatalogApi::new(&config.api_url).context("Failed to create catalog client")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx, SignalBus::new());

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, Box::new(api), task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to a file, since the terminal belongs to the UI.
///
/// The filter defaults to `albumui=info` and can be overridden with
/// `RUST_LOG`.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("albumui=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_ansi(false).with_writer(Mutex::new(file)))
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform requests against the catalog service.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
/// * A forwarder relaying bus signals into the event loop.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Box<dyn api::CatalogApi>,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(api, task_rx, app.event_tx.clone(), app.bus.clone());

    // Translate raw key presses to application events. Release and repeat
    // events are dropped so each key acts once.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press && tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Send a periodic tick application event, this is effectively the
    // minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // The album list follows the bus through the event loop.
    let signals = app.bus.subscribe();
    let tx_signals = app.event_tx.clone();
    thread::spawn(move || {
        while let Ok(signal) = signals.recv() {
            if tx_signals.send(AppEvent::Signal(signal)).is_err() {
                break;
            }
        }
    });

    // Initial trigger to populate the album list.
    app.task_tx
        .send(AppTask::LoadAlbums)
        .context("Failed to request album list")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
