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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Components draw themselves through [`Render`], and
//! the album editor is drawn last as a modal over the album list.

mod commander;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::{App, render::commander::draw_commander, theme::Theme};

const LIST_HINT: &str =
    " Enter edit | a artist | n new album | r reload | : command | q quit ";

const EDITOR_WIDTH: u16 = 72;
const EDITOR_HEIGHT: u16 = 24;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the album list, a line of key hints and the
/// command line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    app.album_list.draw(f, outer[0], &app.theme);

    let muted = Style::default().fg(app.theme.muted_colour);
    f.render_widget(Paragraph::new(Line::from(LIST_HINT)).style(muted), outer[1]);
    f.render_widget(
        Paragraph::new(Line::from(format!("{} ", app.config.api_url)))
            .style(muted)
            .alignment(Alignment::Right),
        outer[1],
    );

    draw_commander(f, outer[2], app);

    if let Some(editor) = app.editor.as_mut() {
        let popup = popup_area(outer[0], EDITOR_WIDTH, EDITOR_HEIGHT);
        editor.draw(f, popup, &app.theme);
    }
}

/// A rectangle of at most the given size centred in `area`.
pub(crate) fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
