//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Leave search input (keep query, return to normal mode)
        InputKey::Esc | InputKey::Enter => Some(Message::CancelSearch),

        // Delete character
        InputKey::Backspace => {
            let mut query = state.search.raw.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // The list stays navigable while the prompt has focus
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),

        InputKey::Char(c) => {
            let mut query = state.search.raw.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // '/' - Enter search mode (vim-style)
        InputKey::Char('/') => Some(Message::StartSearch),

        // 'c' - Clear the query, only when one is set
        InputKey::Char('c') => {
            if state.search.has_query() {
                Some(Message::ClearSearch)
            } else {
                None
            }
        }

        // ─────────────────────────────────────────────────────────
        // List Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') | InputKey::Down => Some(Message::CursorDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::CursorUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::CursorToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::CursorToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // Enter or 'v' - toggle the details panel of the selected launch
        InputKey::Enter | InputKey::Char('v') => Some(Message::ToggleDetails),

        // 'r' - Retry the failed page, only when a fetch has failed
        InputKey::Char('r') => {
            if state.feed.error.is_some() {
                Some(Message::RetryFetch)
            } else {
                None
            }
        }

        // 'm' - Manual load-more
        InputKey::Char('m') => Some(Message::RequestMore),

        _ => None,
    }
}
