//! liftoff-app - Application state and orchestration for Liftoff
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the vocabulary of
//! state transitions, [`handler::update`] the pure transition function, and
//! [`actions::handle_action`] the boundary where background work (debounce
//! timers, page fetches) is spawned.

pub mod actions;
pub mod config;
pub mod debounce;
pub mod feed;
pub mod handler;
pub mod input_key;
pub mod list_view;
pub mod message;
pub mod process;
pub mod search;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use debounce::QueryDebouncer;
pub use feed::{FeedState, PageRequest};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use list_view::ListViewState;
pub use message::Message;
pub use process::process_message;
pub use search::SearchState;
pub use state::{AppPhase, AppState, UiMode};
