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

//! Render the album editor modal.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tui_input::Input;

use crate::{
    components::editor::{AlbumEditor, EditorField, EditorMode, TrackRowState},
    render::Render,
    theme::Theme,
};

const HINT: &str = " Tab next field | Ctrl-S save | Ctrl-T add track | Ctrl-D delete | Esc close ";

impl Render for AlbumEditor {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let heading = match self.mode() {
            EditorMode::New => " New album ".to_string(),
            EditorMode::Existing => format!(" Edit album #{} ", self.album_id()),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(heading)
            .title_bottom(Line::from(HINT).style(Style::default().fg(theme.muted_colour)))
            .border_style(Style::default().fg(theme.accent_colour));
        let inner = block.inner(area);

        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let artist_height = u16::try_from(self.artists.len()).unwrap_or(u16::MAX).clamp(1, 6) + 2;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(artist_height),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        self.draw_title(f, rows[0], theme);
        self.draw_artists(f, rows[1], theme);
        self.draw_tracks(f, rows[2], theme);
        self.draw_buttons(f, rows[3], theme);
    }
}

impl AlbumEditor {
    fn draw_title(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == EditorField::Title;
        let border = if self.title_is_valid() {
            theme.border(focused)
        } else {
            theme.border(focused).fg(theme.invalid_colour)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Title ")
            .border_style(border);

        draw_input(f, area, block, &self.title, "Album Title", focused, theme);
    }

    fn draw_artists(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let items: Vec<ListItem> = self
            .artists
            .iter()
            .map(|artist| ListItem::new(artist.name.as_str()))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Artist ")
                    .border_style(theme.border(self.focus == EditorField::Artist)),
            )
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");

        f.render_stateful_widget(list, columns[0], &mut self.artist_state);

        let new_artist_area = Rect {
            height: columns[1].height.min(3),
            ..columns[1]
        };
        let focused = self.focus == EditorField::NewArtist;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" -or- New artist ")
            .border_style(theme.border(focused));

        draw_input(f, new_artist_area, block, &self.new_artist, "Artist Name", focused, theme);
    }

    fn draw_tracks(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == EditorField::Tracks;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Tracks ")
            .border_style(theme.border(focused));
        let inner = block.inner(area);

        let mut items: Vec<ListItem> = self
            .tracks
            .iter()
            .map(|row| match &row.state {
                TrackRowState::Saved => ListItem::new(Span::styled(
                    row.title.as_str(),
                    Style::default().fg(theme.track_fg),
                )),
                TrackRowState::Editing(input) => ListItem::new(Line::from(vec![
                    Span::styled("> ", Style::default().fg(theme.focus_colour)),
                    Span::raw(input.value()),
                ])),
                TrackRowState::Saving => ListItem::new(Line::from(vec![
                    Span::raw(row.title.as_str()),
                    Span::styled(" (saving)", Style::default().fg(theme.muted_colour)),
                ])),
                TrackRowState::Unsaved => ListItem::new(Line::from(vec![
                    Span::raw(row.title.as_str()),
                    Span::styled(" (not saved)", Style::default().fg(theme.invalid_colour)),
                ])),
            })
            .collect();

        let editing = self.tracks.iter().enumerate().find_map(|(i, row)| match &row.state {
            TrackRowState::Editing(input) => Some((i, input)),
            _ => None,
        });

        if self.mode() == EditorMode::Existing && editing.is_none() {
            items.push(ListItem::new(Span::styled(
                "+",
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        // The list scrolls to keep the selected row visible: the row being
        // typed into, otherwise the last row.
        let selected = editing
            .map(|(index, _)| index)
            .or(items.len().checked_sub(1));
        let mut state = ListState::default().with_selected(selected);

        f.render_stateful_widget(List::new(items).block(block), area, &mut state);

        if let Some((index, input)) = editing {
            let y = inner.y + index.saturating_sub(state.offset()) as u16;
            if y < inner.y + inner.height {
                let x = inner.x + 2 + input.visual_cursor() as u16;
                f.set_cursor_position((x.min(inner.x + inner.width.saturating_sub(1)), y));
            }
        }
    }

    fn draw_buttons(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let button = |label: &'static str, field: EditorField| {
            if self.focus == field {
                Span::styled(label, theme.highlight())
            } else {
                Span::styled(label, Style::default().fg(theme.accent_colour))
            }
        };

        let mut spans = vec![Span::raw(" "), button("[ Save ]", EditorField::Save)];
        if self.mode() == EditorMode::Existing {
            spans.push(Span::raw("  "));
            spans.push(button("[ Delete ]", EditorField::Delete));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn draw_input(
    f: &mut Frame,
    area: Rect,
    block: Block,
    input: &Input,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let inner = block.inner(area);
    let width = inner.width.max(1) as usize;
    let scroll = input.visual_scroll(width);

    let text = if input.value().is_empty() && !focused {
        Paragraph::new(placeholder).style(Style::default().fg(theme.muted_colour))
    } else {
        Paragraph::new(input.value()).scroll((0, scroll as u16))
    };

    f.render_widget(text.block(block), area);

    if focused {
        let x = inner.x + (input.visual_cursor().max(scroll) - scroll) as u16;
        f.set_cursor_position((x, inner.y));
    }
}
