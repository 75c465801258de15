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

//! Catalog REST service client.
//!
//! The rest of the application talks to the service only through the
//! [`CatalogApi`] trait, the production implementation being
//! [`HttpCatalogApi`]. Task handlers take a `&dyn CatalogApi` so tests can
//! substitute a recording fake.
//!
//! # Responses
//!
//! The service reports failures as a JSON object with a single `error`
//! field. Such a body is treated as a failure whatever the HTTP status, so
//! a `200` carrying `{"error": "..."}` is still an [`ApiError::Application`].

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub(crate) use http::HttpCatalogApi;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Album, Artist, NewTrack, Track};

pub(crate) const ALBUM_PATH: &str = "/api/v1/album";
pub(crate) const ARTIST_PATH: &str = "/api/v1/artist";
pub(crate) const TRACK_PATH: &str = "/api/v1/track";

pub(crate) fn album_path(id: i64) -> String {
    format!("{ALBUM_PATH}/{id}")
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response status {0}")]
    Status(StatusCode),

    #[error("service error: {0}")]
    Application(String),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub(crate) trait CatalogApi: Send {
    /// `GET /api/v1/album`
    fn list_albums(&self) -> Result<Vec<Album>, ApiError>;

    /// `POST /api/v1/album`, returning the created album.
    fn create_album(&self, album: &Album) -> Result<Album, ApiError>;

    /// `PUT /api/v1/album/{id}`.
    ///
    /// Returns `None` when the service acknowledges the update with an empty
    /// body.
    fn update_album(&self, album: &Album) -> Result<Option<Album>, ApiError>;

    /// `DELETE /api/v1/album/{id}`, the album is sent as the request body.
    fn delete_album(&self, album: &Album) -> Result<(), ApiError>;

    /// `GET /api/v1/artist`
    fn list_artists(&self) -> Result<Vec<Artist>, ApiError>;

    /// `POST /api/v1/track`, returning the created track.
    fn create_track(&self, track: &NewTrack) -> Result<Track, ApiError>;
}

/// Extracts the message from an `{"error": ...}` body.
pub(crate) fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("error")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn check(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
    if let Some(message) = error_message(body) {
        return Err(ApiError::Application(message));
    }
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    Ok(())
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    check(status, body)?;
    Ok(serde_json::from_slice(body)?)
}

/// Like [`decode`], but an empty successful body yields `None`.
pub(crate) fn decode_optional<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<Option<T>, ApiError> {
    check(status, body)?;
    if is_blank(body) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}

pub(crate) fn expect_success(status: StatusCode, body: &[u8]) -> Result<(), ApiError> {
    check(status, body)
}
