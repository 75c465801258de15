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

//! Recording catalog client for tests.
//!
//! Every call is recorded with its method, path and JSON body. Responses are
//! canned: lists come from `albums` and `artists`, created entities are
//! echoed back with `next_id`, and setting `error` makes every call fail
//! with an application error body.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::{
    api::{ALBUM_PATH, ARTIST_PATH, ApiError, CatalogApi, TRACK_PATH, album_path},
    model::{Album, Artist, NewTrack, Track},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub(crate) method: &'static str,
    pub(crate) path: String,
    pub(crate) body: Option<Value>,
}

#[derive(Default)]
pub(crate) struct FakeCatalogApi {
    pub(crate) albums: Vec<Album>,
    pub(crate) artists: Vec<Artist>,
    /// Body returned from a `PUT`, `None` for an empty acknowledgement.
    pub(crate) updated: Option<Album>,
    pub(crate) next_id: i64,
    pub(crate) error: Option<String>,
    pub(crate) requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeCatalogApi {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 100,
            ..Self::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record<B: Serialize>(
        &self,
        method: &'static str,
        path: String,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        let body = body.map(|b| serde_json::to_value(b).unwrap());
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { method, path, body });

        match &self.error {
            Some(message) => Err(ApiError::Application(message.clone())),
            None => Ok(()),
        }
    }
}

impl CatalogApi for FakeCatalogApi {
    fn list_albums(&self) -> Result<Vec<Album>, ApiError> {
        self.record::<()>("GET", ALBUM_PATH.to_string(), None)?;
        Ok(self.albums.clone())
    }

    fn create_album(&self, album: &Album) -> Result<Album, ApiError> {
        self.record("POST", ALBUM_PATH.to_string(), Some(album))?;
        Ok(Album {
            id: self.next_id,
            ..album.clone()
        })
    }

    fn update_album(&self, album: &Album) -> Result<Option<Album>, ApiError> {
        self.record("PUT", album_path(album.id), Some(album))?;
        Ok(self.updated.clone())
    }

    fn delete_album(&self, album: &Album) -> Result<(), ApiError> {
        self.record("DELETE", album_path(album.id), Some(album))
    }

    fn list_artists(&self) -> Result<Vec<Artist>, ApiError> {
        self.record::<()>("GET", ARTIST_PATH.to_string(), None)?;
        Ok(self.artists.clone())
    }

    fn create_track(&self, track: &NewTrack) -> Result<Track, ApiError> {
        self.record("POST", TRACK_PATH.to_string(), Some(track))?;
        Ok(Track {
            id: self.next_id,
            title: track.title.clone(),
            album: track.album,
            rating: 0,
        })
    }
}
