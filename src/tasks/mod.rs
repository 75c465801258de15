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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to keep network requests
//! off the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into calls on the catalog service and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Tasks are processed one at a time in the order they were submitted.
//! There is no cancellation: once a request has been issued it runs until it
//! completes or fails, and failures are never retried.

mod handlers;
use handlers::*;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::debug;

use crate::{
    api::CatalogApi,
    events::AppEvent,
    model::{Album, NewTrack},
    signals::SignalBus,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppTask {
    LoadAlbums,

    /// Fetch the artists for the inline picker on the given album row.
    LoadPickerArtists(i64),

    /// Fetch the artists, then open the editor on the album.
    LoadEditorArtists(Album),

    SaveAlbum(Album),
    SaveAlbumArtist(Album),
    DeleteAlbum(Album),

    /// Create a track, `row` identifies the editor row awaiting the result.
    SaveTrack { row: usize, track: NewTrack },
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `api` - The catalog client, owned by the worker from now on.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
/// * `bus` - Signal bus used to announce changes to the album collection.
pub(crate) fn spawn_task_worker(
    api: Box<dyn CatalogApi>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
    bus: SignalBus,
) {
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                api: api.as_ref(),
                event_tx: &event_tx,
                bus: &bus,
            };

            if let Err(e) = handle_task(task, &ctx) {
                let _ = event_tx.send(AppEvent::Error(format!("{e:#}")));
            }
        }
        debug!("task channel closed, worker exiting");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    pub(crate) api: &'a dyn CatalogApi,
    pub(crate) event_tx: &'a Sender<AppEvent>,
    pub(crate) bus: &'a SignalBus,
}

/// Orchestrates the execution of a single task.
pub(crate) fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadAlbums => load_albums(ctx),
        AppTask::LoadPickerArtists(album_id) => load_picker_artists(ctx, album_id),
        AppTask::LoadEditorArtists(album) => load_editor_artists(ctx, album),
        AppTask::SaveAlbum(album) => save_album(ctx, album),
        AppTask::SaveAlbumArtist(album) => save_album_artist(ctx, album),
        AppTask::DeleteAlbum(album) => delete_album(ctx, album),
        AppTask::SaveTrack { row, track } => save_track(ctx, row, track),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use serde_json::json;

    use super::*;
    use crate::{
        api::fake::FakeCatalogApi,
        model::{Artist, Track},
        signals::Signal,
    };

    struct Harness {
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
        bus: SignalBus,
        signals: Receiver<Signal>,
    }

    impl Harness {
        fn new() -> Self {
            let (event_tx, event_rx) = mpsc::channel();
            let bus = SignalBus::new();
            let signals = bus.subscribe();
            Self {
                event_tx,
                event_rx,
                bus,
                signals,
            }
        }

        fn run(&self, api: &FakeCatalogApi, task: AppTask) -> Result<()> {
            let ctx = TaskContext {
                api,
                event_tx: &self.event_tx,
                bus: &self.bus,
            };
            handle_task(task, &ctx)
        }

        fn events(&self) -> Vec<AppEvent> {
            self.event_rx.try_iter().collect()
        }

        fn reloads(&self) -> usize {
            self.signals.try_iter().count()
        }
    }

    fn album(id: i64, title: &str) -> Album {
        Album {
            id,
            title: title.to_string(),
            artist: Artist::new(2, "Portishead"),
            ..Album::default()
        }
    }

    #[test]
    fn load_albums_sends_collection() {
        let harness = Harness::new();
        let api = FakeCatalogApi {
            albums: vec![album(1, "Dummy"), album(2, "Third")],
            ..FakeCatalogApi::new()
        };

        harness.run(&api, AppTask::LoadAlbums).unwrap();

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::AlbumsLoaded(albums)] if albums.len() == 2));
    }

    #[test]
    fn load_albums_failure_sends_nothing() {
        let harness = Harness::new();
        let api = FakeCatalogApi::failing("database unavailable");

        let result = harness.run(&api, AppTask::LoadAlbums);

        assert!(result.is_err());
        assert!(harness.events().is_empty());
    }

    #[test]
    fn new_album_is_posted_and_replaced_by_response() {
        let harness = Harness::new();
        let api = FakeCatalogApi {
            next_id: 41,
            ..FakeCatalogApi::new()
        };

        harness.run(&api, AppTask::SaveAlbum(album(0, "Dummy"))).unwrap();

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/album");

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::AlbumSaved(saved)] if saved.id == 41 && saved.title == "Dummy"));
        assert_eq!(harness.reloads(), 1);
    }

    #[test]
    fn existing_album_is_put_to_its_own_path() {
        let harness = Harness::new();
        let server_copy = Album {
            rating: 4,
            ..album(3, "Third")
        };
        let api = FakeCatalogApi {
            updated: Some(server_copy.clone()),
            ..FakeCatalogApi::new()
        };

        harness.run(&api, AppTask::SaveAlbum(album(3, "Third"))).unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/api/v1/album/3");
        assert_eq!(requests[0].body.as_ref().unwrap()["artist"]["name"], "Portishead");

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::AlbumSaved(saved)] if *saved == server_copy));
        assert_eq!(harness.reloads(), 1);
    }

    #[test]
    fn empty_update_acknowledgement_keeps_submitted_album() {
        let harness = Harness::new();
        let api = FakeCatalogApi::new();
        let submitted = album(5, "Roseland");

        harness.run(&api, AppTask::SaveAlbum(submitted.clone())).unwrap();

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::AlbumSaved(saved)] if *saved == submitted));
    }

    #[test]
    fn album_without_title_is_never_sent() {
        let harness = Harness::new();
        let api = FakeCatalogApi::new();

        harness.run(&api, AppTask::SaveAlbum(album(0, ""))).unwrap();

        assert!(api.requests().is_empty());
        assert!(harness.events().is_empty());
        assert_eq!(harness.reloads(), 0);
    }

    #[test]
    fn album_without_artist_is_never_sent() {
        let harness = Harness::new();
        let api = FakeCatalogApi::new();
        let unnamed = album(2, "Third").with_artist(Artist::new(0, ""));

        harness.run(&api, AppTask::SaveAlbum(unnamed)).unwrap();

        assert!(api.requests().is_empty());
    }

    #[test]
    fn error_body_leaves_state_alone() {
        let harness = Harness::new();
        let api = FakeCatalogApi::failing("Invalid album artist provided.");

        let result = harness.run(&api, AppTask::SaveAlbum(album(0, "Dummy")));

        assert!(result.is_err());
        assert!(harness.events().is_empty());
        assert_eq!(harness.reloads(), 0);
    }

    #[test]
    fn delete_sends_album_and_reloads_once() {
        let harness = Harness::new();
        let api = FakeCatalogApi::new();

        harness.run(&api, AppTask::DeleteAlbum(album(4, "Dummy"))).unwrap();

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/api/v1/album/4");
        assert_eq!(requests[0].body.as_ref().unwrap()["id"], 4);

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::AlbumDeleted(4)]));
        assert_eq!(harness.reloads(), 1);
    }

    #[test]
    fn failed_delete_does_not_reload() {
        let harness = Harness::new();
        let api = FakeCatalogApi::failing("Album not found.");

        assert!(harness.run(&api, AppTask::DeleteAlbum(album(4, "Dummy"))).is_err());
        assert!(harness.events().is_empty());
        assert_eq!(harness.reloads(), 0);
    }

    #[test]
    fn artist_change_is_put_without_reload() {
        let harness = Harness::new();
        let api = FakeCatalogApi::new();
        let changed = album(6, "Dummy").with_artist(Artist::new(9, "Beth Gibbons"));

        harness.run(&api, AppTask::SaveAlbumArtist(changed)).unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/api/v1/album/6");
        assert_eq!(requests[0].body.as_ref().unwrap()["artist"], json!({"id": 9, "name": "Beth Gibbons"}));
        assert_eq!(harness.reloads(), 0);
    }

    #[test]
    fn track_is_posted_with_title_and_album() {
        let harness = Harness::new();
        let api = FakeCatalogApi {
            next_id: 12,
            ..FakeCatalogApi::new()
        };
        let track = NewTrack {
            title: "Intro".to_string(),
            album: 7,
        };

        harness.run(&api, AppTask::SaveTrack { row: 3, track }).unwrap();

        let requests = api.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/api/v1/track");
        assert_eq!(requests[0].body, Some(json!({"title": "Intro", "album": 7})));

        let events = harness.events();
        let expected = Track {
            id: 12,
            title: "Intro".to_string(),
            album: 7,
            rating: 0,
        };
        assert!(matches!(
            &events[..],
            [AppEvent::TrackSaved { album_id: 7, row: 3, track }] if *track == expected
        ));
    }

    #[test]
    fn failed_track_marks_row() {
        let harness = Harness::new();
        let api = FakeCatalogApi::failing("Track title taken.");
        let track = NewTrack {
            title: "Intro".to_string(),
            album: 7,
        };

        assert!(harness.run(&api, AppTask::SaveTrack { row: 0, track }).is_err());

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::TrackSaveFailed { album_id: 7, row: 0 }]));
    }

    #[test]
    fn editor_artists_arrive_with_album() {
        let harness = Harness::new();
        let api = FakeCatalogApi {
            artists: vec![Artist::new(1, "Tricky"), Artist::new(2, "Massive Attack")],
            ..FakeCatalogApi::new()
        };

        harness
            .run(&api, AppTask::LoadEditorArtists(Album::blank()))
            .unwrap();

        let events = harness.events();
        assert!(matches!(
            &events[..],
            [AppEvent::EditorReady(album, artists)] if album.is_new() && artists.len() == 2
        ));
    }

    #[test]
    fn picker_artists_arrive_with_album_id() {
        let harness = Harness::new();
        let api = FakeCatalogApi {
            artists: vec![Artist::new(1, "Tricky")],
            ..FakeCatalogApi::new()
        };

        harness.run(&api, AppTask::LoadPickerArtists(8)).unwrap();

        let events = harness.events();
        assert!(matches!(&events[..], [AppEvent::PickerReady(8, artists)] if artists.len() == 1));
    }
}
