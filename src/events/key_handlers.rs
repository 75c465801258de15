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

//! Keyboard routing.
//!
//! An open editor takes every key. Otherwise the command line gets the first
//! look, unless an artist picker is open and the command line is not, and the
//! album list handles whatever is left.

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};

use crate::{
    App,
    components::{EditorAction, ListAction},
    events::AppEvent,
    model::Album,
    signals::Signal,
    tasks::AppTask,
};

/// Maps a key press to component actions, and those to tasks and events.
///
/// # Errors
///
/// Returns an error if a task or event cannot be sent, which only happens
/// once the receiving side has shut down.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if let Some(editor) = app.editor.as_mut() {
        if let Some(action) = editor.process_event(&event) {
            handle_editor_action(app, action)?;
        }
        return Ok(());
    }

    let commander_first = app.commander.active() || app.album_list.picker.is_none();
    if commander_first && app.commander.handle_event(&event, &app.event_tx, &app.bus) {
        return Ok(());
    }

    if let Some(action) = app.album_list.process_event(&event) {
        handle_list_action(app, action)?;
    }

    Ok(())
}

fn handle_editor_action(app: &mut App, action: EditorAction) -> Result<()> {
    match action {
        EditorAction::Save(album) => app.task_tx.send(AppTask::SaveAlbum(album))?,
        EditorAction::Delete(album) => app.task_tx.send(AppTask::DeleteAlbum(album))?,
        EditorAction::SaveTrack { row, track } => {
            app.task_tx.send(AppTask::SaveTrack { row, track })?
        }
        EditorAction::Close => app.editor = None,
    }

    Ok(())
}

fn handle_list_action(app: &mut App, action: ListAction) -> Result<()> {
    match action {
        ListAction::Edit(album) => app.event_tx.send(AppEvent::OpenEditor(album))?,
        ListAction::PickArtist(album_id) => {
            app.task_tx.send(AppTask::LoadPickerArtists(album_id))?
        }
        ListAction::Add => app.event_tx.send(AppEvent::OpenEditor(Album::blank()))?,
        ListAction::Reload => {
            app.bus.publish(Signal::ReloadAlbums);
        }
        ListAction::Quit => app.event_tx.send(AppEvent::ExitApplication)?,
        ListAction::SaveArtist(album) => app.task_tx.send(AppTask::SaveAlbumArtist(album))?,
    }

    Ok(())
}
