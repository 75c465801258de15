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

//! Application event loop and dispatching.
//!
//! Every input reaches the UI thread as an [`AppEvent`] on a single channel:
//! key presses from the terminal, results posted back by the task worker,
//! and signals forwarded from the [`SignalBus`](crate::signals::SignalBus).
//! The loop applies each event to the application state and redraws.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Album, Artist, Track},
    render::draw,
    signals::Signal,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Signal(Signal),

    AlbumsLoaded(Vec<Album>),

    /// Artists fetched for the picker on the album with this id.
    PickerReady(i64, Vec<Artist>),
    /// Artists fetched for the editor, together with the album to edit.
    EditorReady(Album, Vec<Artist>),

    AlbumSaved(Album),
    AlbumDeleted(i64),

    TrackSaved {
        album_id: i64,
        row: usize,
        track: Track,
    },
    TrackSaveFailed {
        album_id: i64,
        row: usize,
    },

    OpenEditor(Album),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Signal(signal) => handle_signal(app, signal)?,
        AppEvent::AlbumsLoaded(albums) => handle_albums_loaded(app, albums),
        AppEvent::PickerReady(id, artists) => handle_picker_ready(app, id, artists),
        AppEvent::EditorReady(album, artists) => handle_editor_ready(app, album, artists),
        AppEvent::AlbumSaved(album) => handle_album_saved(app, album),
        AppEvent::AlbumDeleted(id) => handle_album_deleted(app, id),
        AppEvent::TrackSaved { album_id, row, track } => {
            handle_track_saved(app, album_id, row, track)
        }
        AppEvent::TrackSaveFailed { album_id, row } => {
            handle_track_save_failed(app, album_id, row)
        }
        AppEvent::OpenEditor(album) => handle_open_editor(app, album)?,
        AppEvent::Error(message) => handle_error(message),
        AppEvent::Tick | AppEvent::ExitApplication => handle_tick(app),
    }

    Ok(())
}
