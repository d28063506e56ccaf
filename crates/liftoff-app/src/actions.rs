//! Action handlers: UpdateAction dispatch and background task spawning

use liftoff_core::prelude::*;
use tokio::sync::mpsc;

use liftoff_api::{LaunchApi, PageQuery};

use crate::debounce::QueryDebouncer;
use crate::feed::PageRequest;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action from the update loop.
pub fn handle_action<A>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    debouncer: &mut QueryDebouncer,
    api: &A,
) where
    A: LaunchApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::Debounce { text } => debouncer.submit(text),
        UpdateAction::FetchPage(request) => spawn_page_fetch(msg_tx, api.clone(), request),
    }
}

/// Spawn a background task for one page read.
///
/// The task sends exactly one completion message, success or failure --
/// whichever arrives releases the feed's loading gate.
fn spawn_page_fetch<A>(msg_tx: mpsc::Sender<Message>, api: A, request: PageRequest)
where
    A: LaunchApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let page = PageQuery {
            limit: request.limit,
            offset: request.offset,
            mission_name: request.mission_name.clone(),
        };
        let message = match api.fetch_page(page).await {
            Ok(launches) => Message::PageLoaded {
                session: request.session,
                launches,
            },
            Err(e) => {
                warn!(offset = request.offset, error = %e, "page fetch failed");
                Message::PageFailed {
                    session: request.session,
                    error: e.to_string(),
                }
            }
        };
        if msg_tx.send(message).await.is_err() {
            debug!("message channel closed; dropping fetch result");
        }
    });
}
