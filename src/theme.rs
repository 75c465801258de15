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

//! Visual styling and color configuration for the TUI.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_colour: Color,
    pub(crate) invalid_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,

    pub(crate) album_title_fg: Color,
    pub(crate) artist_fg: Color,
    pub(crate) track_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_colour: Color::Rgb(255, 215, 0),
            invalid_colour: Color::Rgb(235, 87, 87),
            muted_colour: Color::Rgb(162, 161, 166),
            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg: Color::Rgb(50, 30, 60),

            album_title_fg: Color::Rgb(255, 255, 255),
            artist_fg: Color::Rgb(179, 157, 219),
            track_fg: Color::Rgb(220, 220, 220),
        }
    }

    /// Border style for a widget, highlighted when it has focus.
    pub(crate) fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.focus_colour)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_colour)
        }
    }

    pub(crate) fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.accent_colour)
            .add_modifier(Modifier::BOLD)
    }
}
