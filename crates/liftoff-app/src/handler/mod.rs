//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `scroll`: Cursor/viewport handlers and the fetch trigger
//! - `fetch`: Search propagation and page fetch handlers

pub(crate) mod fetch;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::feed::PageRequest;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// (Re)start the search debounce window with the latest raw query
    Debounce { text: String },

    /// Spawn a background page fetch
    FetchPage(PageRequest),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
