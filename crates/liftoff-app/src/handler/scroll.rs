//! Cursor/viewport handlers and the near-bottom fetch trigger

use crate::state::AppState;

use super::{fetch, UpdateResult};

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.list.cursor_up(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    state.list.cursor_down(1);
    maybe_fetch_more(state)
}

pub fn handle_cursor_to_top(state: &mut AppState) -> UpdateResult {
    state.list.cursor_to_top();
    UpdateResult::none()
}

pub fn handle_cursor_to_bottom(state: &mut AppState) -> UpdateResult {
    state.list.cursor_to_bottom();
    maybe_fetch_more(state)
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.list.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.list.page_down();
    maybe_fetch_more(state)
}

/// Toggle the details panel of the selected launch
pub fn handle_toggle_details(state: &mut AppState) -> UpdateResult {
    let flight_number = state
        .visible_launches()
        .get(state.list.selected)
        .map(|launch| launch.flight_number);

    if let Some(flight_number) = flight_number {
        state.list.toggle_expanded(flight_number);
    }
    UpdateResult::none()
}

/// Request the next page when the viewport has reached the end of the
/// loaded list. The gate inside `begin_fetch` keeps this to one request
/// per approach and none at all once the feed is exhausted.
pub(crate) fn maybe_fetch_more(state: &mut AppState) -> UpdateResult {
    if !state.list.near_bottom(state.settings.ui.fetch_threshold) {
        return UpdateResult::none();
    }
    fetch::request_page(state)
}
