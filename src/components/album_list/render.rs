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

//! Render the album list, and the artist picker when one is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};

use crate::{
    components::{AlbumListView, ArtistPicker},
    model::Artist,
    render::{Render, popup_area},
    theme::Theme,
};

impl Render for AlbumListView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let picking = self.picker.as_ref().map(|picker| picker.album_id());

        let items: Vec<ListItem> = self
            .store
            .iter()
            .map(|album| {
                let artist_style = if picking == Some(album.id) {
                    Style::default()
                        .fg(theme.focus_colour)
                        .add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.artist_fg)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(album.title.as_str(), Style::default().fg(theme.album_title_fg)),
                    Span::styled(" by ", Style::default().fg(theme.muted_colour)),
                    Span::styled(album.artist.name.as_str(), artist_style),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Albums ({}) ", self.store.len()))
                    .border_style(theme.border(self.picker.is_none())),
            )
            .highlight_style(theme.highlight())
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);

        if let Some(picker) = self.picker.as_mut() {
            picker.draw(f, area, theme);
        }
    }
}

impl Render for ArtistPicker {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = popup_width(&self.artists);
        let height = u16::try_from(self.artists.len()).unwrap_or(u16::MAX).clamp(1, 12) + 2;
        let popup = popup_area(area, width, height);

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
                    .border_style(theme.border(true)),
            )
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut self.state);
    }
}

/// Wide enough for the longest artist name plus borders and the highlight
/// symbol.
fn popup_width(artists: &[Artist]) -> u16 {
    let longest = artists
        .iter()
        .map(|artist| artist.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(20);
    u16::try_from(longest).unwrap_or(u16::MAX).saturating_add(6)
}
