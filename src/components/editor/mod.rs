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

//! Album editor modal.
//!
//! The editor is opened on an [`Album`] snapshot together with the list of
//! known artists. It operates in one of two modes:
//!
//! * **New** - the album has no id yet, saving creates it. Tracks cannot be
//!   added and the album cannot be deleted.
//! * **Existing** - the album is known to the service, saving updates it.
//!
//! The editor never talks to the service itself. Key handling produces an
//! [`EditorAction`] carrying the data for the request, and the caller turns
//! that into a background task.

mod event;
mod render;

use ratatui::widgets::ListState;
use tui_input::Input;

use crate::model::{Album, Artist, NewTrack, Track, ValidationError};

/// Shortest title the title field accepts as valid.
pub(crate) const MIN_TITLE_LEN: usize = 5;

/// Shortest free-text artist name that takes precedence over the dropdown.
pub(crate) const MIN_NEW_ARTIST_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorMode {
    New,
    Existing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorField {
    Title,
    Artist,
    NewArtist,
    Tracks,
    Save,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EditorAction {
    Save(Album),
    Delete(Album),
    SaveTrack { row: usize, track: NewTrack },
    Close,
}

#[derive(Debug)]
pub(crate) enum TrackRowState {
    Saved,
    Editing(Input),
    Saving,
    Unsaved,
}

#[derive(Debug)]
pub(crate) struct TrackRow {
    pub(crate) key: usize,
    pub(crate) title: String,
    pub(crate) state: TrackRowState,
}

/// The values entered into the editor form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AlbumForm<'a> {
    pub(crate) title: &'a str,
    pub(crate) selected_artist: Option<&'a Artist>,
    pub(crate) new_artist: &'a str,
}

impl AlbumForm<'_> {
    /// A typed artist name wins over the dropdown, provided it is long
    /// enough to be valid.
    pub(crate) fn resolve_artist(&self) -> Artist {
        let typed = self.new_artist.trim();
        if typed.chars().count() >= MIN_NEW_ARTIST_LEN {
            return Artist::new(0, typed);
        }
        self.selected_artist.cloned().unwrap_or_default()
    }

    /// Builds the album to submit from `base`, the snapshot the editor was
    /// opened on.
    pub(crate) fn resolve(&self, base: &Album) -> Result<Album, ValidationError> {
        let album = base
            .with_title(self.title.trim())
            .with_artist(self.resolve_artist());
        album.validate()?;
        Ok(album)
    }
}

pub(crate) struct AlbumEditor {
    album: Album,
    mode: EditorMode,
    pub(crate) focus: EditorField,
    pub(crate) title: Input,
    pub(crate) artists: Vec<Artist>,
    pub(crate) artist_state: ListState,
    pub(crate) new_artist: Input,
    pub(crate) tracks: Vec<TrackRow>,
    next_row_key: usize,
}

impl AlbumEditor {
    pub(crate) fn open(album: Album, artists: Vec<Artist>) -> Self {
        let mode = if album.is_new() {
            EditorMode::New
        } else {
            EditorMode::Existing
        };

        let selected = artists
            .iter()
            .position(|artist| artist.id == album.artist.id)
            .or((!artists.is_empty()).then_some(0));

        let tracks: Vec<TrackRow> = album
            .tracks
            .iter()
            .enumerate()
            .map(|(key, track)| TrackRow {
                key,
                title: track.title.clone(),
                state: TrackRowState::Saved,
            })
            .collect();

        Self {
            title: Input::new(album.title.clone()),
            mode,
            focus: EditorField::Title,
            artists,
            artist_state: ListState::default().with_selected(selected),
            new_artist: Input::default(),
            next_row_key: tracks.len(),
            tracks,
            album,
        }
    }

    pub(crate) fn mode(&self) -> EditorMode {
        self.mode
    }

    pub(crate) fn album(&self) -> &Album {
        &self.album
    }

    pub(crate) fn album_id(&self) -> i64 {
        self.album.id
    }

    pub(crate) fn title_is_valid(&self) -> bool {
        self.title.value().trim().chars().count() >= MIN_TITLE_LEN
    }

    pub(crate) fn selected_artist(&self) -> Option<&Artist> {
        self.artists.get(self.artist_state.selected()?)
    }

    pub(crate) fn form(&self) -> AlbumForm<'_> {
        AlbumForm {
            title: self.title.value(),
            selected_artist: self.selected_artist(),
            new_artist: self.new_artist.value(),
        }
    }

    /// Fields reachable with Tab, in display order.
    pub(crate) fn fields(&self) -> &'static [EditorField] {
        match self.mode {
            EditorMode::New => &[
                EditorField::Title,
                EditorField::Artist,
                EditorField::NewArtist,
                EditorField::Save,
            ],
            EditorMode::Existing => &[
                EditorField::Title,
                EditorField::Artist,
                EditorField::NewArtist,
                EditorField::Tracks,
                EditorField::Save,
                EditorField::Delete,
            ],
        }
    }

    pub(crate) fn editing_track(&self) -> bool {
        self.tracks
            .iter()
            .any(|row| matches!(row.state, TrackRowState::Editing(_)))
    }

    fn save(&self) -> Option<EditorAction> {
        match self.form().resolve(&self.album) {
            Ok(album) => Some(EditorAction::Save(album)),
            Err(e) => {
                tracing::warn!(album_id = self.album.id, "Malformed album: {e}");
                None
            }
        }
    }

    fn delete(&self) -> Option<EditorAction> {
        (self.mode == EditorMode::Existing).then(|| EditorAction::Delete(self.album.clone()))
    }

    /// Appends an empty track row and moves focus to it. Only existing
    /// albums can have tracks added.
    fn add_track(&mut self) -> bool {
        if self.mode != EditorMode::Existing || self.editing_track() {
            return false;
        }

        self.tracks.push(TrackRow {
            key: self.next_row_key,
            title: String::new(),
            state: TrackRowState::Editing(Input::default()),
        });
        self.next_row_key += 1;
        self.focus = EditorField::Tracks;
        true
    }

    /// Ends editing of the pending track row. A blank row is discarded,
    /// otherwise the row waits for the service to save it.
    fn blur_track(&mut self) -> Option<EditorAction> {
        let index = self
            .tracks
            .iter()
            .position(|row| matches!(row.state, TrackRowState::Editing(_)))?;

        let title = match &self.tracks[index].state {
            TrackRowState::Editing(input) => input.value().trim().to_string(),
            _ => return None,
        };

        if title.is_empty() {
            self.tracks.remove(index);
            return None;
        }

        let row = &mut self.tracks[index];
        row.title = title.clone();
        row.state = TrackRowState::Saving;

        Some(EditorAction::SaveTrack {
            row: row.key,
            track: NewTrack {
                title,
                album: self.album.id,
            },
        })
    }

    /// Records a track the service has accepted.
    pub(crate) fn track_saved(&mut self, row: usize, track: Track) {
        if let Some(existing) = self.tracks.iter_mut().find(|r| r.key == row) {
            existing.state = TrackRowState::Saved;
        }
        self.album = self.album.with_track(track);
    }

    pub(crate) fn track_failed(&mut self, row: usize) {
        if let Some(existing) = self.tracks.iter_mut().find(|r| r.key == row) {
            existing.state = TrackRowState::Unsaved;
        }
    }
}
