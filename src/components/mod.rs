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

//! Interactive widgets making up the album catalog UI.
//!
//! Each component owns its own state, turns key events into an action enum
//! for the caller to act on, and renders through [`crate::render::Render`].

mod album_list;
mod artist_picker;
mod editor;

pub(crate) use album_list::{AlbumListView, ListAction};
pub(crate) use artist_picker::{ArtistPicker, PickerAction};
pub(crate) use editor::{AlbumEditor, EditorAction};

use ratatui::widgets::ListState;

/// Moves the selection down one row, wrapping to the top.
pub(crate) fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => 0,
        None => 0,
    };
    state.select(Some(i));
}

/// Moves the selection up one row, wrapping to the bottom.
pub(crate) fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => len - 1,
        Some(i) => (i - 1).min(len - 1),
        None => 0,
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_first_row() {
        let mut state = ListState::default().with_selected(Some(2));
        select_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn previous_wraps_to_last_row() {
        let mut state = ListState::default().with_selected(Some(0));
        select_previous(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn empty_list_keeps_no_selection() {
        let mut state = ListState::default();
        select_next(&mut state, 0);
        select_previous(&mut state, 0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn selection_starts_at_top() {
        let mut state = ListState::default();
        select_previous(&mut state, 4);
        assert_eq!(state.selected(), Some(0));
    }
}
