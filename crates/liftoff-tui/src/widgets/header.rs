//! Title line widget

use liftoff_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line application header
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                " Liftoff",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" — SpaceX launches", Style::default().fg(Color::DarkGray)),
        ];

        let loaded = self.state.feed.len();
        if loaded > 0 {
            spans.push(Span::styled(
                format!("  ·  {loaded} loaded"),
                Style::default().fg(Color::Gray),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
