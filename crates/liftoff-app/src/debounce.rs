//! Debounced propagation of the raw search query.
//!
//! A scoped timer resource owned by the event loop: every raw-query update
//! aborts the pending timer task (explicit cancellation, not overwrite) and
//! arms a new one. Only a window that survives untouched for the full
//! duration sends `Message::SearchCommitted`; teardown cancels whatever is
//! pending so no commit can fire after the loop exits.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;

/// Default quiescence window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Debounce timer for the search query.
#[derive(Debug)]
pub struct QueryDebouncer {
    window: Duration,
    msg_tx: mpsc::Sender<Message>,
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    pub fn new(window: Duration, msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            window,
            msg_tx,
            pending: None,
        }
    }

    /// Restart the quiescence window with the latest raw query.
    pub fn submit(&mut self, text: String) {
        self.cancel();
        let tx = self.msg_tx.clone();
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if tx.send(Message::SearchCommitted { text }).await.is_err() {
                tracing::debug!("message channel closed; dropping committed query");
            }
        }));
    }

    /// Cancel the pending window, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a window is currently armed.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
