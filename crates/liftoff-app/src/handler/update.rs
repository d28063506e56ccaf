//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{fetch, keys, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => scroll::handle_cursor_up(state),
        Message::CursorDown => scroll::handle_cursor_down(state),
        Message::CursorToTop => scroll::handle_cursor_to_top(state),
        Message::CursorToBottom => scroll::handle_cursor_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ToggleDetails => scroll::handle_toggle_details(state),

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            state.search.is_active = true;
            UpdateResult::none()
        }

        Message::CancelSearch => {
            state.ui_mode = UiMode::Normal;
            state.search.is_active = false;
            UpdateResult::none()
        }

        Message::ClearSearch => fetch::handle_search_input(state, String::new()),

        Message::SearchInput { text } => fetch::handle_search_input(state, text),
        Message::SearchCommitted { text } => fetch::handle_search_committed(state, text),

        // ─────────────────────────────────────────────────────────
        // Feed Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestMore => fetch::handle_request_more(state),
        Message::RetryFetch => fetch::handle_retry(state),
        Message::PageLoaded { session, launches } => {
            fetch::handle_page_loaded(state, session, launches)
        }
        Message::PageFailed { session, error } => fetch::handle_page_failed(state, session, error),
    }
}
