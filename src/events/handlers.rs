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

use anyhow::Result;
use tracing::{debug, error};

use crate::{
    App,
    components::AlbumEditor,
    model::{Album, Artist, Track},
    signals::Signal,
    tasks::AppTask,
};

pub(super) fn handle_signal(app: &mut App, signal: Signal) -> Result<()> {
    match signal {
        Signal::ReloadAlbums => {
            app.album_list.clear();
            app.task_tx.send(AppTask::LoadAlbums)?;
        }
    }

    Ok(())
}

pub(super) fn handle_albums_loaded(app: &mut App, albums: Vec<Album>) {
    debug!(count = albums.len(), "albums loaded");
    app.album_list.set_albums(albums);
}

pub(super) fn handle_picker_ready(app: &mut App, album_id: i64, artists: Vec<Artist>) {
    app.album_list.open_picker(album_id, artists);
}

pub(super) fn handle_editor_ready(app: &mut App, album: Album, artists: Vec<Artist>) {
    app.album_list.close_picker();
    app.editor = Some(AlbumEditor::open(album, artists));
}

pub(super) fn handle_album_saved(app: &mut App, album: Album) {
    app.album_list.upsert(album);
    close_modals(app);
}

pub(super) fn handle_album_deleted(app: &mut App, album_id: i64) {
    app.album_list.remove(album_id);
    close_modals(app);
}

pub(super) fn handle_track_saved(app: &mut App, album_id: i64, row: usize, track: Track) {
    match app.editor.as_mut() {
        Some(editor) if editor.album_id() == album_id => editor.track_saved(row, track),
        _ => debug!(album_id, "track saved for an album no longer being edited"),
    }
}

pub(super) fn handle_track_save_failed(app: &mut App, album_id: i64, row: usize) {
    if let Some(editor) = app.editor.as_mut().filter(|e| e.album_id() == album_id) {
        editor.track_failed(row);
    }
}

pub(super) fn handle_open_editor(app: &mut App, album: Album) -> Result<()> {
    app.task_tx.send(AppTask::LoadEditorArtists(album))?;

    Ok(())
}

pub(super) fn handle_error(message: String) {
    error!("{message}");
}

pub(super) fn handle_tick(_app: &mut App) {}

fn close_modals(app: &mut App) {
    app.editor = None;
    app.album_list.close_picker();
}
