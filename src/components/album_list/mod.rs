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

//! The album repository view.
//!
//! Shows one row per album in the store, as "title by artist". A row can be
//! switched into an inline [`ArtistPicker`] to reassign its artist, which is
//! applied to the store straight away and persisted by the caller.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    components::{ArtistPicker, select_next, select_previous},
    model::{Album, Artist, store::AlbumStore},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ListAction {
    /// Open the editor for this album.
    Edit(Album),
    /// Fetch the artist list and open the picker for this album id.
    PickArtist(i64),
    /// Open the editor for a new album.
    Add,
    Reload,
    Quit,
    /// The picker changed this album's artist, persist it.
    SaveArtist(Album),
}

pub(crate) struct AlbumListView {
    pub(crate) store: AlbumStore,
    pub(crate) list_state: ListState,
    pub(crate) picker: Option<ArtistPicker>,
}

impl AlbumListView {
    pub(crate) fn new() -> Self {
        Self {
            store: AlbumStore::new(),
            list_state: ListState::default(),
            picker: None,
        }
    }

    /// Empties the view ahead of a reload.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.picker = None;
        self.list_state.select(None);
    }

    pub(crate) fn set_albums(&mut self, albums: Vec<Album>) {
        let previous = self.selected_album().map(|album| album.id);
        self.store.replace_all(albums);

        let index = previous
            .and_then(|id| self.store.position(id))
            .or((!self.store.is_empty()).then_some(0));
        self.list_state.select(index);
    }

    pub(crate) fn selected_album(&self) -> Option<&Album> {
        let id = self.store.id_at(self.list_state.selected()?)?;
        self.store.get(id)
    }

    pub(crate) fn open_picker(&mut self, album_id: i64, artists: Vec<Artist>) {
        let Some(album) = self.store.get(album_id) else {
            tracing::warn!(album_id, "album no longer listed, not opening artist picker");
            return;
        };
        self.picker = Some(ArtistPicker::new(album_id, &album.artist.name, artists));
    }

    pub(crate) fn close_picker(&mut self) {
        self.picker = None;
    }

    /// Reassigns the artist of a listed album, returning the snapshot to save.
    pub(crate) fn apply_artist(&mut self, album_id: i64, artist: Artist) -> Option<Album> {
        self.store.update_artist(album_id, artist)
    }

    pub(crate) fn upsert(&mut self, album: Album) {
        let id = album.id;
        self.store.upsert(album);
        if self.list_state.selected().is_none() {
            self.list_state.select(self.store.position(id));
        }
    }

    pub(crate) fn remove(&mut self, album_id: i64) {
        if self.store.remove(album_id).is_none() {
            return;
        }
        if self.picker.as_ref().is_some_and(|p| p.album_id() == album_id) {
            self.picker = None;
        }
        let len = self.store.len();
        let index = self.list_state.selected().map(|i| i.min(len.saturating_sub(1)));
        self.list_state.select(index.filter(|_| len > 0));
    }

    fn next(&mut self) {
        select_next(&mut self.list_state, self.store.len());
    }

    fn previous(&mut self) {
        select_previous(&mut self.list_state, self.store.len());
    }

    fn first(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn last(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(self.store.len() - 1));
        }
    }
}
