//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::feed::FeedState;
use crate::list_view::ListViewState;
use crate::search::SearchState;
use liftoff_core::LaunchRecord;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal list browsing
    #[default]
    Normal,

    /// Search input mode - keystrokes edit the query
    SearchInput,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub feed: FeedState,
    pub search: SearchState,
    pub list: ListViewState,
    /// Spinner animation frame, advanced on ticks while a fetch is in flight
    pub spinner_frame: u8,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), None)
    }

    /// Create state with settings and an optional pre-seeded search query.
    pub fn with_settings(settings: Settings, initial_query: Option<String>) -> Self {
        let search = match initial_query {
            Some(query) if !query.is_empty() => SearchState::with_query(query),
            _ => SearchState::new(),
        };
        let feed = FeedState::new(settings.fetch.page_size);
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            feed,
            search,
            list: ListViewState::new(),
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// The accumulated launches filtered by the effective query,
    /// in server order.
    pub fn visible_launches(&self) -> Vec<&LaunchRecord> {
        self.feed
            .launches
            .iter()
            .filter(|launch| launch.matches_query(&self.search.committed))
            .collect()
    }

    /// Re-sync the list window with the filtered list length.
    pub fn sync_list_total(&mut self) {
        let total = self.visible_launches().len();
        self.list.set_total(total);
    }

    /// Advance the spinner while a fetch is in flight.
    pub fn tick(&mut self) {
        if self.feed.is_loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
