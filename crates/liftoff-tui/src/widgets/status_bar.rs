//! Status bar widget
//!
//! Key hints on the left, fetch state and list position on the right.

use liftoff_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar showing key hints and fetch state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Fetch-state indicator span
    fn fetch_indicator(&self) -> Span<'static> {
        if self.state.feed.error.is_some() {
            Span::styled(
                "✗ fetch failed",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else if self.state.feed.is_loading {
            Span::styled("⟳ fetching", Style::default().fg(Color::Cyan))
        } else if !self.state.feed.has_more {
            Span::styled("✓ all loaded", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled("⇣ scroll for more", Style::default().fg(Color::DarkGray))
        }
    }

    /// List position string, e.g. "12-20/96"
    fn position(&self) -> String {
        let list = &self.state.list;
        if list.total_items == 0 {
            "0/0".to_string()
        } else {
            let first = list.offset + 1;
            let last = (list.offset + list.visible_items).min(list.total_items);
            format!("{}-{}/{}", first, last, list.total_items)
        }
    }

    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));
        let hint_style = Style::default().fg(Color::Gray);

        let mut segments = Vec::new();
        segments.push(Span::raw(" "));
        segments.push(Span::styled(
            "j/k scroll  / search  ⏎ details  q quit",
            hint_style,
        ));

        segments.push(separator.clone());
        segments.push(self.fetch_indicator());

        segments.push(separator);
        segments.push(Span::styled(
            self.position(),
            Style::default().fg(Color::DarkGray),
        ));
        segments.push(Span::raw(" "));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator from the list
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments())).render(inner, buf);
    }
}
