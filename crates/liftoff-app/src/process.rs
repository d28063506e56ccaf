//! Message processing
//!
//! Drives the TEA update loop: each message runs through `update()`, any
//! resulting action is dispatched, and follow-up messages are processed in
//! the same pass.

use tokio::sync::mpsc;

use liftoff_api::LaunchApi;

use crate::debounce::QueryDebouncer;
use crate::message::Message;
use crate::state::AppState;
use crate::{actions, handler};

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut QueryDebouncer,
    api: &A,
) where
    A: LaunchApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx.clone(), debouncer, api);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
