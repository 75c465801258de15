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

//! In-memory album store.
//!
//! Albums are kept keyed by their id, with a separate ordering so the list
//! view renders them in the order the service returned them.

use std::collections::HashMap;

use crate::model::{Album, Artist};

#[derive(Debug, Default)]
pub(crate) struct AlbumStore {
    order: Vec<i64>,
    albums: HashMap<i64, Album>,
}

impl AlbumStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.albums.clear();
    }

    /// Replaces the whole contents of the store, keeping the given order.
    pub(crate) fn replace_all(&mut self, albums: Vec<Album>) {
        self.clear();
        for album in albums {
            self.upsert(album);
        }
    }

    /// Inserts an album, or replaces the existing album with the same id in
    /// place.
    pub(crate) fn upsert(&mut self, album: Album) {
        if !self.albums.contains_key(&album.id) {
            self.order.push(album.id);
        }
        self.albums.insert(album.id, album);
    }

    pub(crate) fn remove(&mut self, id: i64) -> Option<Album> {
        self.order.retain(|existing| *existing != id);
        self.albums.remove(&id)
    }

    pub(crate) fn get(&self, id: i64) -> Option<&Album> {
        self.albums.get(&id)
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<i64> {
        self.order.get(index).copied()
    }

    pub(crate) fn position(&self, id: i64) -> Option<usize> {
        self.order.iter().position(|existing| *existing == id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Album> {
        self.order.iter().filter_map(|id| self.albums.get(id))
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reassigns the artist of an album, returning the new snapshot.
    pub(crate) fn update_artist(&mut self, id: i64, artist: Artist) -> Option<Album> {
        let updated = self.albums.get(&id)?.with_artist(artist);
        self.albums.insert(id, updated.clone());
        Some(updated)
    }
}
