//! Search input widget
//!
//! Always visible below the header, mirroring the raw query as typed. The
//! match counter compares the filtered list against everything loaded.

use liftoff_app::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input box
pub struct SearchBar<'a> {
    search: &'a SearchState,
    visible: usize,
    total: usize,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchState) -> Self {
        Self {
            search,
            visible: 0,
            total: 0,
        }
    }

    /// Attach filtered/total counts for the match indicator
    pub fn counts(mut self, visible: usize, total: usize) -> Self {
        self.visible = visible;
        self.total = total;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.search.is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(
            "/",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];

        if self.search.raw.is_empty() && !self.search.is_active {
            spans.push(Span::styled(
                " press / to search missions",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                self.search.raw.clone(),
                Style::default().fg(Color::White),
            ));
        }

        // Cursor while the prompt has focus
        if self.search.is_active {
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }

        // Match counter once a query is set
        if !self.search.raw.is_empty() {
            let style = if self.visible > 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{}/{}", self.visible, self.total),
                style,
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
