//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title line
    pub header: Rect,

    /// Search input box (always visible)
    pub search: Rect,

    /// Launch list
    pub list: Rect,

    /// Status bar (key hints, position, fetch state)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = vec![
        Constraint::Length(1), // Header line
        Constraint::Length(3), // Search box (bordered)
        Constraint::Min(3),    // Launch list
        Constraint::Length(2), // Status bar (top border + content)
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}
