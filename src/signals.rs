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

//! Application-wide signals.
//!
//! A [`SignalBus`] is a cloneable publish/subscribe handle. Every subscriber
//! receives its own copy of each published [`Signal`] over an `mpsc`
//! channel. Subscribers whose receiver has been dropped are discarded on the
//! next publish.

use std::sync::{
    Arc, Mutex, PoisonError,
    mpsc::{self, Receiver, Sender},
};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    /// The album collection changed on the server and should be fetched
    /// again.
    ReloadAlbums,
}

#[derive(Clone, Default)]
pub(crate) struct SignalBus {
    subscribers: Arc<Mutex<Vec<Sender<Signal>>>>,
}

impl SignalBus {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(&self) -> Receiver<Signal> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Delivers the signal to every live subscriber, returning how many
    /// received it.
    pub(crate) fn publish(&self, signal: Signal) -> usize {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        subscribers.retain(|tx| tx.send(signal).is_ok());

        debug!(?signal, receivers = subscribers.len(), "signal published");
        subscribers.len()
    }
}
