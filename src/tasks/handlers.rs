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

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    events::AppEvent,
    model::{Album, NewTrack},
    signals::Signal,
    tasks::TaskContext,
};

pub(super) fn load_albums(ctx: &TaskContext) -> Result<()> {
    let albums = ctx
        .api
        .list_albums()
        .context("Unable to retrieve album list")?;
    ctx.event_tx.send(AppEvent::AlbumsLoaded(albums))?;

    Ok(())
}

pub(super) fn load_picker_artists(ctx: &TaskContext, album_id: i64) -> Result<()> {
    let artists = ctx
        .api
        .list_artists()
        .context("Unable to retrieve artist list")?;
    ctx.event_tx.send(AppEvent::PickerReady(album_id, artists))?;

    Ok(())
}

pub(super) fn load_editor_artists(ctx: &TaskContext, album: Album) -> Result<()> {
    let artists = ctx
        .api
        .list_artists()
        .context("Unable to retrieve artist list")?;
    ctx.event_tx.send(AppEvent::EditorReady(album, artists))?;

    Ok(())
}

pub(super) fn save_album(ctx: &TaskContext, album: Album) -> Result<()> {
    if let Err(e) = album.validate() {
        warn!(album_id = album.id, "Malformed album: {e}");
        return Ok(());
    }

    let saved = if album.is_new() {
        ctx.api
            .create_album(&album)
            .with_context(|| format!("Failed to create album '{}'", album.title))?
    } else {
        ctx.api
            .update_album(&album)
            .with_context(|| format!("Failed to update album {}", album.id))?
            .unwrap_or(album)
    };

    info!(album_id = saved.id, title = %saved.title, "album saved");
    ctx.event_tx.send(AppEvent::AlbumSaved(saved))?;
    ctx.bus.publish(Signal::ReloadAlbums);

    Ok(())
}

pub(super) fn save_album_artist(ctx: &TaskContext, album: Album) -> Result<()> {
    ctx.api
        .update_album(&album)
        .with_context(|| format!("Failed to change artist of album {}", album.id))?;

    info!(album_id = album.id, artist = %album.artist.name, "album artist changed");

    Ok(())
}

pub(super) fn delete_album(ctx: &TaskContext, album: Album) -> Result<()> {
    ctx.api
        .delete_album(&album)
        .with_context(|| format!("Failed to delete album {}", album.id))?;

    info!(album_id = album.id, "album deleted");
    ctx.event_tx.send(AppEvent::AlbumDeleted(album.id))?;
    ctx.bus.publish(Signal::ReloadAlbums);

    Ok(())
}

pub(super) fn save_track(ctx: &TaskContext, row: usize, track: NewTrack) -> Result<()> {
    let album_id = track.album;

    match ctx.api.create_track(&track) {
        Ok(saved) => {
            info!(album_id, title = %saved.title, "track saved");
            ctx.event_tx
                .send(AppEvent::TrackSaved { album_id, row, track: saved })?;
            Ok(())
        }
        Err(e) => {
            ctx.event_tx
                .send(AppEvent::TrackSaveFailed { album_id, row })?;
            Err(e).with_context(|| format!("Failed to save track '{}'", track.title))
        }
    }
}
