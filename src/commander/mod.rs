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

//! Command-line input logic and state management.
//!
//! A `:` key press activates a text input at the bottom of the screen. When a
//! command is submitted it is dispatched as an application event, or as a
//! signal on the bus, and the command line closes.
//!
//! Commands:
//!
//! * `:q` quits.
//! * `:add` opens the editor for a new album.
//! * `:reload` reloads the album list.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::Album,
    signals::{Signal, SignalBus},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` when the event was consumed by the command line.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
        bus: &SignalBus,
    ) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();
                if !buffer.is_empty() {
                    if let Err(e) = run_command(&buffer, event_tx, bus) {
                        tracing::error!("command '{buffer}' failed: {e:#}");
                    }
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>, bus: &SignalBus) -> Result<()> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => event_tx.send(AppEvent::ExitApplication)?,

        ["add"] => event_tx.send(AppEvent::OpenEditor(Album::blank()))?,

        ["reload"] => {
            bus.publish(Signal::ReloadAlbums);
        }

        [cmd, ..] => tracing::warn!("unknown command '{cmd}'"),

        [] => {}
    }

    Ok(())
}
