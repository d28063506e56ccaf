//! Feed handlers: search propagation, page requests, and completion paths

use liftoff_core::prelude::*;
use liftoff_core::LaunchRecord;

use crate::message::Message;
use crate::state::AppState;

use super::{scroll, UpdateAction, UpdateResult};

/// Record a keystroke's worth of raw input and re-arm the debounce window.
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.search.set_raw(text.clone());
    UpdateResult::action(UpdateAction::Debounce { text })
}

/// A debounced query became effective: reset the session and fetch page
/// zero under the new query. A value equal to the current effective query
/// is a no-op -- no reset, no fetch.
///
/// The reset runs to completion here, before the fetch is dispatched, and
/// the session bump makes any still-in-flight fetch stale on arrival.
pub fn handle_search_committed(state: &mut AppState, text: String) -> UpdateResult {
    if !state.search.commit(text) {
        return UpdateResult::none();
    }

    info!(query = %state.search.committed, "search query changed, resetting feed");
    state.feed.reset_session();
    state.list.reset_window();
    state.sync_list_total();
    request_page(state)
}

/// Scroll trigger or manual load-more.
pub fn handle_request_more(state: &mut AppState) -> UpdateResult {
    request_page(state)
}

/// Retry the failed page.
pub fn handle_retry(state: &mut AppState) -> UpdateResult {
    if state.feed.error.is_none() {
        return UpdateResult::none();
    }
    state.feed.clear_error();
    request_page(state)
}

/// A page fetch resolved successfully.
pub fn handle_page_loaded(
    state: &mut AppState,
    session: u64,
    launches: Vec<LaunchRecord>,
) -> UpdateResult {
    let count = launches.len();
    if !state.feed.apply_page(session, launches) {
        return UpdateResult::none();
    }
    debug!(count, total = state.feed.len(), "page appended");
    state.sync_list_total();

    // The last item changed identity; re-evaluate the trigger so a viewport
    // already at the bottom keeps filling.
    scroll::maybe_fetch_more(state)
}

/// A page fetch failed.
pub fn handle_page_failed(state: &mut AppState, session: u64, error: String) -> UpdateResult {
    if state.feed.apply_failure(session, error) {
        warn!(error = %state.feed.error.as_deref().unwrap_or_default(), "page fetch failed");
    }
    UpdateResult::none()
}

/// Gate and dispatch a page read for the current cursor position.
pub(crate) fn request_page(state: &mut AppState) -> UpdateResult {
    let query = state.search.committed.clone();
    match state.feed.begin_fetch(&query) {
        Some(request) => UpdateResult::action(UpdateAction::FetchPage(request)),
        None => UpdateResult::none(),
    }
}
