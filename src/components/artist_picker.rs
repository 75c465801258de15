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

//! Inline artist selection for a single album row.
//!
//! The picker starts on the artist whose name matches the name currently
//! shown in the row. Committing a different artist reports a change,
//! committing the initial artist or cancelling reports a dismissal.

use crossterm::event::{Event, KeyCode};
use ratatui::widgets::ListState;

use crate::{
    components::{select_next, select_previous},
    model::Artist,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PickerAction {
    Change(Artist),
    Dismiss,
}

pub(crate) struct ArtistPicker {
    album_id: i64,
    initial: Option<usize>,
    pub(crate) artists: Vec<Artist>,
    pub(crate) state: ListState,
}

impl ArtistPicker {
    pub(crate) fn new(album_id: i64, current_name: &str, artists: Vec<Artist>) -> Self {
        let matching = artists.iter().position(|artist| artist.name == current_name);
        // Without a match the first option is shown, as a select control does.
        let initial = matching.or((!artists.is_empty()).then_some(0));

        Self {
            album_id,
            initial,
            artists,
            state: ListState::default().with_selected(initial),
        }
    }

    pub(crate) fn album_id(&self) -> i64 {
        self.album_id
    }

    pub(crate) fn selected(&self) -> Option<&Artist> {
        self.artists.get(self.state.selected()?)
    }

    pub(crate) fn process_event(&mut self, event: &Event) -> Option<PickerAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.state, self.artists.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_previous(&mut self.state, self.artists.len());
                None
            }
            KeyCode::Enter => Some(self.commit()),
            KeyCode::Esc | KeyCode::Tab => Some(PickerAction::Dismiss),
            _ => None,
        }
    }

    fn commit(&self) -> PickerAction {
        if self.state.selected() == self.initial {
            return PickerAction::Dismiss;
        }
        match self.selected() {
            Some(artist) => PickerAction::Change(artist.clone()),
            None => PickerAction::Dismiss,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn artists() -> Vec<Artist> {
        vec![
            Artist::new(4, "Low"),
            Artist::new(5, "Codeine"),
            Artist::new(6, "Bedhead"),
        ]
    }

    #[test]
    fn preselects_option_matching_row_text() {
        let picker = ArtistPicker::new(1, "Codeine", artists());
        assert_eq!(picker.selected(), Some(&Artist::new(5, "Codeine")));
    }

    #[test]
    fn unmatched_text_preselects_first_option() {
        let picker = ArtistPicker::new(1, "Slint", artists());
        assert_eq!(picker.selected().map(|a| a.id), Some(4));
    }

    #[test]
    fn committing_current_artist_dismisses() {
        let mut picker = ArtistPicker::new(1, "Codeine", artists());
        assert_eq!(picker.process_event(&key(KeyCode::Enter)), Some(PickerAction::Dismiss));
    }

    #[test]
    fn committing_another_artist_reports_change() {
        let mut picker = ArtistPicker::new(1, "Codeine", artists());
        picker.process_event(&key(KeyCode::Char('j')));

        assert_eq!(
            picker.process_event(&key(KeyCode::Enter)),
            Some(PickerAction::Change(Artist::new(6, "Bedhead")))
        );
    }

    #[test]
    fn moving_away_and_back_is_not_a_change() {
        let mut picker = ArtistPicker::new(1, "Low", artists());
        picker.process_event(&key(KeyCode::Down));
        picker.process_event(&key(KeyCode::Up));

        assert_eq!(picker.process_event(&key(KeyCode::Enter)), Some(PickerAction::Dismiss));
    }

    #[test]
    fn escape_dismisses_without_change() {
        let mut picker = ArtistPicker::new(1, "Low", artists());
        picker.process_event(&key(KeyCode::Char('k')));
        assert_eq!(picker.process_event(&key(KeyCode::Esc)), Some(PickerAction::Dismiss));
    }

    #[test]
    fn empty_artist_list_only_dismisses() {
        let mut picker = ArtistPicker::new(1, "Low", vec![]);
        picker.process_event(&key(KeyCode::Down));
        assert_eq!(picker.process_event(&key(KeyCode::Enter)), Some(PickerAction::Dismiss));
    }
}
