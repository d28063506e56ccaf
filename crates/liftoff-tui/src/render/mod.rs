//! Main render/view function (View in TEA pattern)

use chrono::Datelike;
use liftoff_app::state::AppState;
use liftoff_core::LaunchRecord;
use ratatui::Frame;

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - the only state it writes is the
/// list viewport bookkeeping (scroll window, visible item count).
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);

    // Client-side filter over everything loaded this session.
    let launches: Vec<&LaunchRecord> = state
        .feed
        .launches
        .iter()
        .filter(|launch| launch.matches_query(&state.search.committed))
        .collect();

    frame.render_widget(
        widgets::SearchBar::new(&state.search).counts(launches.len(), state.feed.launches.len()),
        areas.search,
    );

    let list = widgets::LaunchList::new(&launches, chrono::Utc::now().year())
        .loading(state.feed.is_loading)
        .has_more(state.feed.has_more)
        .error(state.feed.error.as_deref())
        .spinner_frame(state.spinner_frame);
    frame.render_stateful_widget(list, areas.list, &mut state.list);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
