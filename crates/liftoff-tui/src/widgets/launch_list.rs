//! Launch list widget
//!
//! Renders the filtered launches as a scrollable list with one optional
//! expanded details panel. The widget writes the viewport size back into
//! [`ListViewState`] during render; the handlers use that to decide when
//! the next page should be fetched.

use liftoff_app::ListViewState;
use liftoff_core::{LaunchRecord, LaunchStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Braille spinner characters for the loading footer
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Wrapped detail lines shown per expanded panel
const MAX_DETAIL_LINES: usize = 4;

/// Indent for the expanded details panel
const DETAIL_INDENT: &str = "      ";

/// Scrollable launch list with expandable details
pub struct LaunchList<'a> {
    launches: &'a [&'a LaunchRecord],
    now_year: i32,
    is_loading: bool,
    has_more: bool,
    error: Option<&'a str>,
    spinner_frame: u8,
}

impl<'a> LaunchList<'a> {
    pub fn new(launches: &'a [&'a LaunchRecord], now_year: i32) -> Self {
        Self {
            launches,
            now_year,
            is_loading: false,
            has_more: true,
            error: None,
            spinner_frame: 0,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn spinner_frame(mut self, frame: u8) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn status_span(status: LaunchStatus) -> Span<'static> {
        let color = match status {
            LaunchStatus::Success => Color::Green,
            LaunchStatus::Upcoming => Color::Yellow,
            LaunchStatus::Failed => Color::Red,
        };
        Span::styled(status.label(), Style::default().fg(color))
    }

    /// One-row summary: marker, flight number, mission name, status cell.
    fn title_line(&self, launch: &LaunchRecord, width: u16, selected: bool) -> Line<'static> {
        let marker = if selected { "▸ " } else { "  " };
        let number = format!("#{:<4} ", launch.flight_number);
        let status = Self::status_span(launch.status());

        let fixed = marker.width() + number.width() + status.content.width() + 1;
        let name_width = (width as usize).saturating_sub(fixed);
        let name = truncate_to_width(&launch.mission_name, name_width);
        let pad = " ".repeat(name_width.saturating_sub(name.width()));

        let name_style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(number, Style::default().fg(Color::DarkGray)),
            Span::styled(name, name_style),
            Span::raw(pad),
            status,
            Span::raw(" "),
        ]);
        if selected {
            line = line.style(Style::default().add_modifier(Modifier::REVERSED));
        }
        line
    }

    /// Details panel: launch date/age, links, and the description. Every
    /// field renders defensively when absent.
    fn detail_lines(&self, launch: &LaunchRecord, width: u16) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::new();

        let mut meta = Vec::new();
        if let Some(date) = launch.launch_date_utc {
            meta.push(date.format("%Y-%m-%d %H:%M UTC").to_string());
        }
        if let Some(years) = launch.years_ago(self.now_year) {
            if years > 0 {
                let unit = if years == 1 { "year" } else { "years" };
                meta.push(format!("{years} {unit} ago"));
            }
        }
        if !meta.is_empty() {
            lines.push(Line::from(vec![
                Span::raw(DETAIL_INDENT),
                Span::styled(meta.join(" · "), Style::default().fg(Color::Gray)),
            ]));
        }

        for (label, link) in [
            ("Article", &launch.links.article_link),
            ("Video", &launch.links.video_link),
            ("Patch", &launch.links.mission_patch_small),
        ] {
            if let Some(url) = link {
                lines.push(Line::from(vec![
                    Span::raw(DETAIL_INDENT),
                    Span::styled(format!("{label}: "), dim),
                    Span::styled(url.clone(), Style::default().fg(Color::Blue)),
                ]));
            }
        }

        let text_width = (width as usize).saturating_sub(DETAIL_INDENT.len() + 1);
        match launch.details.as_deref().filter(|d| !d.is_empty()) {
            Some(details) => {
                for row in wrap_text(details, text_width, MAX_DETAIL_LINES) {
                    lines.push(Line::from(vec![Span::raw(DETAIL_INDENT), Span::styled(row, dim)]));
                }
            }
            None => lines.push(Line::from(vec![
                Span::raw(DETAIL_INDENT),
                Span::styled("No details available.", dim),
            ])),
        }

        lines
    }

    /// Fetch-state footer: failure, spinner, or the end-of-list notice.
    fn footer_line(&self) -> Option<Line<'static>> {
        if let Some(error) = self.error {
            return Some(Line::from(vec![
                Span::styled(format!("✗ {error}"), Style::default().fg(Color::Red)),
                Span::styled("  (r to retry)", Style::default().fg(Color::DarkGray)),
            ]));
        }
        if self.is_loading {
            let frame = SPINNER[self.spinner_frame as usize % SPINNER.len()];
            return Some(Line::from(Span::styled(
                format!("{frame} Loading more…"),
                Style::default().fg(Color::Cyan),
            )));
        }
        if !self.has_more {
            return Some(Line::from(Span::styled(
                "End of list.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None
    }
}

impl StatefulWidget for LaunchList<'_> {
    type State = ListViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListViewState) {
        let block = Block::default().borders(Borders::ALL).title(" Launches ");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let footer = self.footer_line();
        let body_height = if footer.is_some() {
            inner.height.saturating_sub(1) as usize
        } else {
            inner.height as usize
        };

        // Scroll the window to the selection before laying items out.
        state.set_total(self.launches.len());
        state.update_viewport(body_height);

        let mut lines: Vec<Line> = Vec::new();
        let mut rendered = 0usize;
        for (idx, launch) in self.launches.iter().enumerate().skip(state.offset) {
            let mut item_lines = vec![self.title_line(launch, inner.width, idx == state.selected)];
            if state.is_expanded(launch.flight_number) {
                item_lines.extend(self.detail_lines(launch, inner.width));
            }
            if rendered > 0 && lines.len() + item_lines.len() > body_height {
                break;
            }
            lines.extend(item_lines);
            rendered += 1;
            if lines.len() >= body_height {
                break;
            }
        }
        // Record how many items actually fit (details panels shrink it).
        state.visible_items = rendered;

        let body_area = Rect::new(inner.x, inner.y, inner.width, body_height as u16);
        Paragraph::new(lines).render(body_area, buf);

        if let Some(footer) = footer {
            let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
            Paragraph::new(footer).render(footer_area, buf);
        }
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap capped at `max_lines`, ellipsizing when cut short.
fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let fits = if current.is_empty() {
            word.width() <= width
        } else {
            current.width() + 1 + word.width() <= width
        };

        if fits {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                mark_truncated(&mut lines, width);
                return lines;
            }
        }
        current = if word.width() > width {
            truncate_to_width(word, width)
        } else {
            word.to_string()
        };
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn mark_truncated(lines: &mut [String], width: usize) {
    if let Some(last) = lines.last_mut() {
        if last.width() < width {
            last.push('…');
        }
    }
}
