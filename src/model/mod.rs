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

//! Domain models and core data structures.
//!
//! This module defines the catalog entities exchanged with the REST
//! service (Artists, Albums and Tracks) along with the request body used to
//! create a track.
//!
//! Albums are treated as immutable snapshots once handed to another part of
//! the application: the `with_*` methods return a new value rather than
//! changing the receiver.

pub(crate) mod store;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Artist {
    #[serde(default)]
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) name: String,
}

impl Artist {
    pub(crate) fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Track {
    #[serde(default)]
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default, skip_serializing_if = "is_unset")]
    pub(crate) album: i64,
    #[serde(default)]
    pub(crate) rating: u32,
}

/// Body of a `POST` to the track endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct NewTrack {
    pub(crate) title: String,
    pub(crate) album: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Album {
    #[serde(default)]
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) artist: Artist,
    #[serde(default, deserialize_with = "null_as_default")]
    pub(crate) tracks: Vec<Track>,
    #[serde(default)]
    pub(crate) published: bool,
    #[serde(default)]
    pub(crate) rating: u32,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("album title must not be empty")]
    EmptyTitle,
    #[error("artist name must not be empty")]
    EmptyArtist,
}

impl Album {
    /// An album that has never been saved.
    pub(crate) fn blank() -> Self {
        Self::default()
    }

    /// Albums without a server assigned id are created with a `POST`, all
    /// others are updated with a `PUT`.
    pub(crate) fn is_new(&self) -> bool {
        self.id <= 0
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.artist.name.trim().is_empty() {
            return Err(ValidationError::EmptyArtist);
        }
        Ok(())
    }

    pub(crate) fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }

    pub(crate) fn with_artist(&self, artist: Artist) -> Self {
        Self {
            artist,
            ..self.clone()
        }
    }

    pub(crate) fn with_track(&self, track: Track) -> Self {
        let mut tracks = self.tracks.clone();
        tracks.push(track);
        Self {
            tracks,
            ..self.clone()
        }
    }
}

fn is_unset(id: &i64) -> bool {
    *id == 0
}

// The service encodes empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_ids_decide_new_or_existing() {
        assert!(Album::blank().is_new());
        assert!(Album { id: -1, ..Album::default() }.is_new());
        assert!(!Album { id: 7, ..Album::default() }.is_new());
    }

    #[test]
    fn validation_requires_title_then_artist() {
        let album = Album::blank();
        assert_eq!(album.validate(), Err(ValidationError::EmptyTitle));

        let album = album.with_title("Blue Train");
        assert_eq!(album.validate(), Err(ValidationError::EmptyArtist));

        let album = album.with_artist(Artist::new(0, "John Coltrane"));
        assert_eq!(album.validate(), Ok(()));
    }

    #[test]
    fn whitespace_title_is_empty() {
        let album = Album::blank()
            .with_title("   ")
            .with_artist(Artist::new(1, "Nina Simone"));
        assert_eq!(album.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn with_track_leaves_original_untouched() {
        let album = Album { id: 3, ..Album::default() };
        let updated = album.with_track(Track {
            id: 10,
            title: "Intro".to_string(),
            ..Track::default()
        });

        assert!(album.tracks.is_empty());
        assert_eq!(updated.tracks.len(), 1);
        assert_eq!(updated.id, 3);
    }

    #[test]
    fn deserializes_service_album_with_null_tracks() {
        let json = r#"{
            "id": 4,
            "title": "Kind of Blue",
            "artist": {"id": 2, "name": "Miles Davis"},
            "tracks": null,
            "published": true,
            "rating": 5
        }"#;

        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.id, 4);
        assert_eq!(album.artist, Artist::new(2, "Miles Davis"));
        assert!(album.tracks.is_empty());
        assert!(album.published);
        assert_eq!(album.rating, 5);
    }

    #[test]
    fn missing_artist_defaults_instead_of_failing() {
        let album: Album = serde_json::from_str(r#"{"id": 1, "title": "Untitled"}"#).unwrap();
        assert_eq!(album.artist, Artist::default());
    }

    #[test]
    fn embedded_tracks_omit_unset_album_id() {
        let track = Track {
            id: 5,
            title: "So What".to_string(),
            album: 0,
            rating: 0,
        };
        let json = serde_json::to_value(&track).unwrap();
        assert!(json.get("album").is_none());
    }

    #[test]
    fn new_track_body_matches_service_contract() {
        let body = NewTrack {
            title: "Intro".to_string(),
            album: 7,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"title":"Intro","album":7}"#
        );
    }
}
