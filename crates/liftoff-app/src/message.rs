//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use liftoff_core::LaunchRecord;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // List Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move the selection up one row
    CursorUp,
    /// Move the selection down one row
    CursorDown,
    /// Jump to the first launch
    CursorToTop,
    /// Jump to the last loaded launch
    CursorToBottom,
    /// Page up in the launch list
    PageUp,
    /// Page down in the launch list
    PageDown,

    /// Toggle the details panel of the selected launch
    ToggleDetails,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Enter search mode (focus the search prompt)
    StartSearch,
    /// Leave search mode, keeping the query
    CancelSearch,
    /// Clear the search query completely
    ClearSearch,
    /// Raw query text changed (one per keystroke)
    SearchInput { text: String },
    /// Debounced effective query, sent once the input has been quiescent
    /// for the debounce window
    SearchCommitted { text: String },

    // ─────────────────────────────────────────────────────────
    // Feed Messages
    // ─────────────────────────────────────────────────────────
    /// Request the next page (scroll trigger or manual load-more)
    RequestMore,
    /// Retry after a failed fetch
    RetryFetch,
    /// A page fetch completed; `session` stamps the feed session the
    /// request was issued under
    PageLoaded {
        session: u64,
        launches: Vec<LaunchRecord>,
    },
    /// A page fetch failed
    PageFailed { session: u64, error: String },
}
