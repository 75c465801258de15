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

//! Input handling for the album list.

use crossterm::event::{Event, KeyCode};

use crate::components::{AlbumListView, ListAction, PickerAction};

impl AlbumListView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ListAction> {
        if let Some(picker) = self.picker.as_mut() {
            let action = picker.process_event(event)?;
            let album_id = picker.album_id();
            self.picker = None;

            return match action {
                PickerAction::Change(artist) => {
                    self.apply_artist(album_id, artist).map(ListAction::SaveArtist)
                }
                PickerAction::Dismiss => None,
            };
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.next(),
            KeyCode::Char('k') | KeyCode::Up => self.previous(),
            KeyCode::Char('g') | KeyCode::Home => self.first(),
            KeyCode::Char('G') | KeyCode::End => self.last(),

            KeyCode::Enter | KeyCode::Char('e') => {
                return self.selected_album().cloned().map(ListAction::Edit);
            }
            KeyCode::Char('a') => {
                return self.selected_album().map(|album| ListAction::PickArtist(album.id));
            }
            KeyCode::Char('n') | KeyCode::Char('+') => return Some(ListAction::Add),
            KeyCode::Char('r') => return Some(ListAction::Reload),
            KeyCode::Char('q') => return Some(ListAction::Quit),
            _ => {}
        }

        None
    }
}
