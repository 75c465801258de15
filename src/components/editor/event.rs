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

//! Input handling for the album editor.
//!
//! Text fields consume plain key presses, so editor shortcuts use the
//! control modifier:
//!
//! * `Ctrl-S` saves, `Ctrl-D` deletes, `Ctrl-T` adds a track.
//! * `Tab`/`Shift-Tab` move between fields.
//! * `Enter` activates the focused button.
//! * `Esc` closes the editor, or ends editing of a new track.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{
    editor::{AlbumEditor, EditorAction, EditorField, TrackRowState},
    select_next, select_previous,
};

impl AlbumEditor {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<EditorAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if self.editing_track() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => self.blur_track(),
                KeyCode::Tab => {
                    let action = self.blur_track();
                    self.focus_next();
                    action
                }
                KeyCode::BackTab => {
                    let action = self.blur_track();
                    self.focus_previous();
                    action
                }
                _ => {
                    let input = self.tracks.iter_mut().find_map(|row| match &mut row.state {
                        TrackRowState::Editing(input) => Some(input),
                        _ => None,
                    });
                    if let Some(input) = input {
                        input.handle_event(event);
                    }
                    None
                }
            };
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Esc, _) => return Some(EditorAction::Close),
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => return self.save(),
            (KeyCode::Char('d'), KeyModifiers::CONTROL) => return self.delete(),
            (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                self.add_track();
                return None;
            }
            (KeyCode::Tab, _) => {
                self.focus_next();
                return None;
            }
            (KeyCode::BackTab, _) => {
                self.focus_previous();
                return None;
            }
            _ => {}
        }

        match self.focus {
            EditorField::Title => {
                self.title.handle_event(event);
                None
            }
            EditorField::NewArtist => {
                self.new_artist.handle_event(event);
                None
            }
            EditorField::Artist => {
                match key_event.code {
                    KeyCode::Char('j') | KeyCode::Down => {
                        select_next(&mut self.artist_state, self.artists.len())
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        select_previous(&mut self.artist_state, self.artists.len())
                    }
                    _ => {}
                }
                None
            }
            EditorField::Tracks => {
                if matches!(key_event.code, KeyCode::Enter | KeyCode::Char('+')) {
                    self.add_track();
                }
                None
            }
            EditorField::Save => (key_event.code == KeyCode::Enter)
                .then(|| self.save())
                .flatten(),
            EditorField::Delete => (key_event.code == KeyCode::Enter)
                .then(|| self.delete())
                .flatten(),
        }
    }

    fn focus_next(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    fn focus_previous(&mut self) {
        let fields = self.fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }
}
