//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal, the message channel, and the debounce timer; wires
//! terminal events and background fetch results into the TEA loop.

use std::time::Duration;

use tokio::sync::mpsc;

use liftoff_api::LaunchApi;
use liftoff_app::config::Settings;
use liftoff_app::state::AppState;
use liftoff_app::{process_message, Message, QueryDebouncer};
use liftoff_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against a launch listing.
///
/// `initial_query` seeds the search (already effective); the first page is
/// requested before the first frame is drawn.
pub async fn run<A>(settings: Settings, api: A, initial_query: Option<String>) -> Result<()>
where
    A: LaunchApi + Clone + Send + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Mouse capture unavailable: {}", e);
    }

    let mut state = AppState::with_settings(settings.clone(), initial_query);

    // Unified message channel (fetch tasks, debouncer, event loop)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let mut debouncer = QueryDebouncer::new(
        Duration::from_millis(settings.search.debounce_ms),
        msg_tx.clone(),
    );

    // Load page zero on startup.
    let _ = msg_tx.try_send(Message::RequestMore);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &mut debouncer, &api);

    // Cancel any pending debounce window before tearing down.
    debouncer.cancel();
    let _ = terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<A>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut QueryDebouncer,
    api: &A,
) -> Result<()>
where
    A: LaunchApi + Clone + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Drain messages from background tasks (fetches, debouncer)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, debouncer, api);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (or a tick on timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, debouncer, api);
        }
    }

    Ok(())
}
