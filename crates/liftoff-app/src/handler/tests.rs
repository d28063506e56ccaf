//! Tests for handler module

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use liftoff_api::{ApiError, LaunchApi, PageQuery};
use liftoff_core::{LaunchLinks, LaunchRecord};

use super::*;
use crate::config::Settings;
use crate::debounce::QueryDebouncer;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::process::process_message;
use crate::state::{AppPhase, AppState, UiMode};

/// Helper to create a test LaunchRecord with minimal fields
fn record(flight_number: u32, name: &str) -> LaunchRecord {
    LaunchRecord {
        flight_number,
        mission_name: name.to_string(),
        launch_success: Some(true),
        upcoming: false,
        launch_year: Some(2020),
        launch_date_utc: None,
        details: None,
        links: LaunchLinks::default(),
    }
}

fn records(ids: std::ops::RangeInclusive<u32>) -> Vec<LaunchRecord> {
    ids.map(|n| record(n, &format!("Mission {n}"))).collect()
}

fn state_with_page_size(page_size: usize) -> AppState {
    let mut settings = Settings::default();
    settings.fetch.page_size = page_size;
    AppState::with_settings(settings, None)
}

// ─────────────────────────────────────────────────────────
// Lifecycle and key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_quit_message() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_slash_enters_search_mode() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('/')),
        Some(Message::StartSearch)
    ));
}

#[test]
fn test_navigation_keys_map_to_cursor_messages() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('j')),
        Some(Message::CursorDown)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Down),
        Some(Message::CursorDown)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('k')),
        Some(Message::CursorUp)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('g')),
        Some(Message::CursorToTop)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('G')),
        Some(Message::CursorToBottom)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::PageDown),
        Some(Message::PageDown)
    ));
}

#[test]
fn test_enter_and_v_toggle_details() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ToggleDetails)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Char('v')),
        Some(Message::ToggleDetails)
    ));
}

#[test]
fn test_retry_key_only_with_error() {
    let mut state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('r')).is_none());

    state.feed.error = Some("boom".to_string());
    assert!(matches!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::RetryFetch)
    ));
}

#[test]
fn test_clear_key_only_with_query() {
    let mut state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('c')).is_none());

    state.search.raw = "star".to_string();
    assert!(matches!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::ClearSearch)
    ));
}

// ─────────────────────────────────────────────────────────
// Search input mode keys
// ─────────────────────────────────────────────────────────

fn search_mode_state(raw: &str) -> AppState {
    let mut state = AppState::new();
    state.ui_mode = UiMode::SearchInput;
    state.search.raw = raw.to_string();
    state
}

#[test]
fn test_search_mode_char_appends() {
    let state = search_mode_state("sta");
    match handle_key(&state, InputKey::Char('r')) {
        Some(Message::SearchInput { text }) => assert_eq!(text, "star"),
        other => panic!("expected SearchInput, got {other:?}"),
    }
}

#[test]
fn test_search_mode_backspace_pops() {
    let state = search_mode_state("star");
    match handle_key(&state, InputKey::Backspace) {
        Some(Message::SearchInput { text }) => assert_eq!(text, "sta"),
        other => panic!("expected SearchInput, got {other:?}"),
    }
}

#[test]
fn test_search_mode_ctrl_u_clears() {
    let state = search_mode_state("star");
    match handle_key(&state, InputKey::CharCtrl('u')) {
        Some(Message::SearchInput { text }) => assert!(text.is_empty()),
        other => panic!("expected SearchInput, got {other:?}"),
    }
}

#[test]
fn test_search_mode_esc_and_enter_cancel() {
    let state = search_mode_state("star");
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::CancelSearch)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::CancelSearch)
    ));
}

#[test]
fn test_start_and_cancel_search_toggle_mode() {
    let mut state = AppState::new();
    update(&mut state, Message::StartSearch);
    assert_eq!(state.ui_mode, UiMode::SearchInput);
    assert!(state.search.is_active);

    update(&mut state, Message::CancelSearch);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!state.search.is_active);
}

// ─────────────────────────────────────────────────────────
// Search propagation
// ─────────────────────────────────────────────────────────

#[test]
fn test_search_input_updates_raw_and_rearms_debounce() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::SearchInput {
            text: "fal".to_string(),
        },
    );

    assert_eq!(state.search.raw, "fal");
    assert_eq!(state.search.committed, "", "raw input must not become effective");
    match result.action {
        Some(UpdateAction::Debounce { text }) => assert_eq!(text, "fal"),
        other => panic!("expected Debounce action, got {other:?}"),
    }
}

#[test]
fn test_search_committed_resets_and_fetches() {
    let mut state = state_with_page_size(2);
    state.feed.launches.extend(records(1..=4));
    state.feed.next_offset = 4;
    let old_session = state.feed.session();

    let result = update(
        &mut state,
        Message::SearchCommitted {
            text: "star".to_string(),
        },
    );

    // The list is empty before the first post-reset page arrives.
    assert!(state.feed.is_empty());
    assert_eq!(state.feed.next_offset, 0);
    assert!(state.feed.has_more);
    assert_eq!(state.search.committed, "star");

    match result.action {
        Some(UpdateAction::FetchPage(req)) => {
            assert_eq!(req.offset, 0);
            assert_eq!(req.mission_name.as_deref(), Some("star"));
            assert!(req.session > old_session);
        }
        other => panic!("expected FetchPage action, got {other:?}"),
    }
}

#[test]
fn test_search_committed_unchanged_is_noop() {
    let mut state = AppState::new();
    state.feed.launches.extend(records(1..=3));

    let result = update(
        &mut state,
        Message::SearchCommitted {
            text: String::new(),
        },
    );

    assert!(result.action.is_none());
    assert_eq!(state.feed.len(), 3, "no reset on an unchanged effective query");
}

#[test]
fn test_search_committed_empty_after_query_fetches_unfiltered() {
    let mut state = AppState::new();
    state.search.commit("falcon".to_string());

    let result = update(
        &mut state,
        Message::SearchCommitted {
            text: String::new(),
        },
    );

    match result.action {
        Some(UpdateAction::FetchPage(req)) => assert_eq!(req.mission_name, None),
        other => panic!("expected FetchPage action, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Fetch gating and completion
// ─────────────────────────────────────────────────────────

#[test]
fn test_request_more_gate_blocks_second_fetch() {
    let mut state = AppState::new();

    let first = update(&mut state, Message::RequestMore);
    assert!(matches!(first.action, Some(UpdateAction::FetchPage(_))));

    let second = update(&mut state, Message::RequestMore);
    assert!(second.action.is_none(), "gate must hold while loading");
}

#[test]
fn test_page_loaded_appends_and_releases_gate() {
    let mut state = state_with_page_size(2);
    let result = update(&mut state, Message::RequestMore);
    let session = match result.action {
        Some(UpdateAction::FetchPage(req)) => req.session,
        other => panic!("expected FetchPage action, got {other:?}"),
    };

    update(
        &mut state,
        Message::PageLoaded {
            session,
            launches: records(1..=2),
        },
    );

    assert_eq!(state.feed.len(), 2);
    assert!(!state.feed.is_loading);
    assert!(state.feed.has_more);
    assert_eq!(state.list.total_items, 2);
}

#[test]
fn test_short_page_latches_and_blocks_requests() {
    let mut state = state_with_page_size(2);
    let result = update(&mut state, Message::RequestMore);
    let session = match result.action {
        Some(UpdateAction::FetchPage(req)) => req.session,
        other => panic!("unexpected {other:?}"),
    };

    update(
        &mut state,
        Message::PageLoaded {
            session,
            launches: records(1..=1),
        },
    );
    assert!(!state.feed.has_more);

    let after = update(&mut state, Message::RequestMore);
    assert!(after.action.is_none());
}

#[test]
fn test_stale_page_after_query_change_is_discarded() {
    let mut state = state_with_page_size(2);

    // Old-query fetch goes out.
    let old = match update(&mut state, Message::RequestMore).action {
        Some(UpdateAction::FetchPage(req)) => req,
        other => panic!("unexpected {other:?}"),
    };

    // Query changes while it is in flight; a new fetch is dispatched.
    let new = match update(
        &mut state,
        Message::SearchCommitted {
            text: "star".to_string(),
        },
    )
    .action
    {
        Some(UpdateAction::FetchPage(req)) => req,
        other => panic!("unexpected {other:?}"),
    };

    // The old response resolves late and must not re-append.
    update(
        &mut state,
        Message::PageLoaded {
            session: old.session,
            launches: records(1..=2),
        },
    );
    assert!(state.feed.is_empty());
    assert!(state.feed.is_loading, "new session's fetch is still pending");

    update(
        &mut state,
        Message::PageLoaded {
            session: new.session,
            launches: vec![record(7, "Starlink-7")],
        },
    );
    assert_eq!(state.feed.len(), 1);
    assert_eq!(state.feed.launches[0].flight_number, 7);
}

#[test]
fn test_page_failed_sets_error_and_allows_retry() {
    let mut state = state_with_page_size(2);
    let req = match update(&mut state, Message::RequestMore).action {
        Some(UpdateAction::FetchPage(req)) => req,
        other => panic!("unexpected {other:?}"),
    };

    update(
        &mut state,
        Message::PageFailed {
            session: req.session,
            error: "connection reset".to_string(),
        },
    );
    assert_eq!(state.feed.error.as_deref(), Some("connection reset"));
    assert!(!state.feed.is_loading);
    assert!(state.feed.has_more);

    // Retry re-reads the same page.
    let retry = match update(&mut state, Message::RetryFetch).action {
        Some(UpdateAction::FetchPage(req)) => req,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(retry.offset, req.offset);
    assert!(state.feed.error.is_none());
}

#[test]
fn test_retry_without_error_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::RetryFetch);
    assert!(result.action.is_none());
    assert!(!state.feed.is_loading);
}

#[test]
fn test_page_loaded_refills_viewport_at_bottom() {
    let mut state = state_with_page_size(2);
    state.list.update_viewport(10);

    let req = match update(&mut state, Message::RequestMore).action {
        Some(UpdateAction::FetchPage(req)) => req,
        other => panic!("unexpected {other:?}"),
    };

    // Two items cannot fill a ten-row viewport; the trigger re-fires.
    let result = update(
        &mut state,
        Message::PageLoaded {
            session: req.session,
            launches: records(1..=2),
        },
    );
    match result.action {
        Some(UpdateAction::FetchPage(req)) => assert_eq!(req.offset, 2),
        other => panic!("expected follow-up FetchPage, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Details panel and filtering
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_details_is_exclusive() {
    let mut state = AppState::new();
    state.feed.launches.extend(records(1..=3));
    state.sync_list_total();
    state.list.update_viewport(10);

    update(&mut state, Message::ToggleDetails);
    assert_eq!(state.list.expanded, Some(1));

    // Selecting another launch and expanding it collapses the first.
    update(&mut state, Message::CursorDown);
    update(&mut state, Message::ToggleDetails);
    assert_eq!(state.list.expanded, Some(2));

    // Toggling the open one collapses it.
    update(&mut state, Message::ToggleDetails);
    assert_eq!(state.list.expanded, None);
}

#[test]
fn test_toggle_details_on_empty_list_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::ToggleDetails);
    assert!(result.action.is_none());
    assert_eq!(state.list.expanded, None);
}

#[test]
fn test_filter_applies_to_visible_list() {
    let mut state = AppState::new();
    state.feed.launches.push(record(1, "Falcon Heavy"));
    state.feed.launches.push(record(2, "Starlink-1"));
    state.search.committed = "star".to_string();
    state.sync_list_total();

    let visible = state.visible_launches();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].mission_name, "Starlink-1");
    assert_eq!(state.list.total_items, 1);
}

// ─────────────────────────────────────────────────────────
// End-to-end with a scripted API
// ─────────────────────────────────────────────────────────

/// In-memory launch listing with a call counter.
#[derive(Clone)]
struct ScriptedApi {
    records: Arc<Vec<LaunchRecord>>,
    calls: Arc<AtomicUsize>,
    fail_next: Arc<AtomicBool>,
}

impl ScriptedApi {
    fn with_records(count: u32) -> Self {
        Self {
            records: Arc::new(records(1..=count)),
            calls: Arc::new(AtomicUsize::new(0)),
            fail_next: Arc::new(AtomicBool::new(false)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LaunchApi for ScriptedApi {
    async fn fetch_page(&self, page: PageQuery) -> Result<Vec<LaunchRecord>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ApiError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        let query = page.mission_name.unwrap_or_default();
        Ok(self
            .records
            .iter()
            .filter(|r| r.matches_query(&query))
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect())
    }
}

#[tokio::test]
async fn test_end_to_end_five_records_paged_by_two() {
    let api = ScriptedApi::with_records(5);
    let (tx, mut rx) = mpsc::channel(16);
    let mut debouncer = QueryDebouncer::new(Duration::from_millis(500), tx.clone());
    let mut state = state_with_page_size(2);
    // As if a first render sized the viewport.
    state.list.update_viewport(10);

    // One trigger; appended pages keep re-firing the trigger until the
    // short third page latches the feed.
    process_message(&mut state, Message::RequestMore, &tx, &mut debouncer, &api);
    for _ in 0..3 {
        let msg = rx.recv().await.expect("fetch task should report");
        process_message(&mut state, msg, &tx, &mut debouncer, &api);
    }

    assert_eq!(
        state
            .feed
            .launches
            .iter()
            .map(|l| l.flight_number)
            .collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert!(!state.feed.has_more);
    assert_eq!(api.calls(), 3);

    // A further request is a no-op: no API call, no message.
    process_message(&mut state, Message::RequestMore, &tx, &mut debouncer, &api);
    tokio::task::yield_now().await;
    assert_eq!(api.calls(), 3);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_end_to_end_failure_then_retry() {
    let api = ScriptedApi::with_records(3);
    api.fail_next.store(true, Ordering::SeqCst);

    let (tx, mut rx) = mpsc::channel(16);
    let mut debouncer = QueryDebouncer::new(Duration::from_millis(500), tx.clone());
    let mut state = state_with_page_size(2);

    process_message(&mut state, Message::RequestMore, &tx, &mut debouncer, &api);
    let msg = rx.recv().await.expect("failure should report");
    process_message(&mut state, msg, &tx, &mut debouncer, &api);

    assert!(state.feed.error.is_some());
    assert!(!state.feed.is_loading);
    assert!(state.feed.is_empty());

    // Retry succeeds and appends the page.
    process_message(&mut state, Message::RetryFetch, &tx, &mut debouncer, &api);
    let msg = rx.recv().await.expect("retry should report");
    process_message(&mut state, msg, &tx, &mut debouncer, &api);

    assert!(state.feed.error.is_none());
    assert_eq!(state.feed.len(), 2);
}

#[tokio::test]
async fn test_end_to_end_server_side_filter_forwarded() {
    let api = ScriptedApi::with_records(0);
    let (tx, mut rx) = mpsc::channel(16);
    let mut debouncer = QueryDebouncer::new(Duration::from_millis(500), tx.clone());
    let mut state = state_with_page_size(2);

    process_message(
        &mut state,
        Message::SearchCommitted {
            text: "starlink".to_string(),
        },
        &tx,
        &mut debouncer,
        &api,
    );

    let msg = rx.recv().await.expect("fetch task should report");
    process_message(&mut state, msg, &tx, &mut debouncer, &api);

    // Empty dataset: the filtered page is empty and latches the feed.
    assert!(state.feed.is_empty());
    assert!(!state.feed.has_more);
    assert_eq!(api.calls(), 1);
}
