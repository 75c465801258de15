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

//! Blocking HTTP implementation of the catalog client.
//!
//! Requests are issued from the task worker thread, never from the UI
//! thread, so the blocking client is sufficient. No request timeout is set:
//! a request runs until the service answers or the connection fails.

use std::time::Duration;

use reqwest::{
    Method, StatusCode,
    blocking::{Client, RequestBuilder},
};
use serde::Serialize;
use tracing::debug;

use crate::{
    api::{
        ALBUM_PATH, ARTIST_PATH, ApiError, CatalogApi, TRACK_PATH, album_path, decode,
        decode_optional, expect_success,
    },
    model::{Album, Artist, NewTrack, Track},
};

const USER_AGENT: &str = concat!("albumui/", env!("CARGO_PKG_VERSION"));

pub(crate) struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    pub(crate) fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// A request carrying `body` as JSON, with the matching content type.
    fn json_request<B: Serialize>(&self, method: Method, path: &str, body: &B) -> RequestBuilder {
        self.client.request(method, self.url(path)).json(body)
    }

    fn send(&self, request: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!(%status, bytes = body.len(), "response received");
        Ok((status, body))
    }
}

impl CatalogApi for HttpCatalogApi {
    fn list_albums(&self) -> Result<Vec<Album>, ApiError> {
        let (status, body) = self.send(self.client.get(self.url(ALBUM_PATH)))?;
        decode(status, &body)
    }

    fn create_album(&self, album: &Album) -> Result<Album, ApiError> {
        let request = self.json_request(Method::POST, ALBUM_PATH, album);
        let (status, body) = self.send(request)?;
        decode(status, &body)
    }

    fn update_album(&self, album: &Album) -> Result<Option<Album>, ApiError> {
        let request = self.json_request(Method::PUT, &album_path(album.id), album);
        let (status, body) = self.send(request)?;
        decode_optional(status, &body)
    }

    fn delete_album(&self, album: &Album) -> Result<(), ApiError> {
        let request = self.json_request(Method::DELETE, &album_path(album.id), album);
        let (status, body) = self.send(request)?;
        expect_success(status, &body)
    }

    fn list_artists(&self) -> Result<Vec<Artist>, ApiError> {
        let (status, body) = self.send(self.client.get(self.url(ARTIST_PATH)))?;
        decode(status, &body)
    }

    fn create_track(&self, track: &NewTrack) -> Result<Track, ApiError> {
        let request = self.json_request(Method::POST, TRACK_PATH, track);
        let (status, body) = self.send(request)?;
        decode(status, &body)
    }
}
