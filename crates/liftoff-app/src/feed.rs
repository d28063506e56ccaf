//! Pagination feed state
//!
//! [`FeedState`] owns the cursor bookkeeping for one search session: the
//! accumulated launches, the `limit`/`offset` cursor, the exhaustion latch,
//! and the single-fetch loading gate. All transitions go through the three
//! operations `begin_fetch` / `apply_page` / `apply_failure`, plus
//! `reset_session` when the effective query changes.
//!
//! Every reset bumps a session counter, and completion messages carry the
//! session their request was issued under. A response from a superseded
//! session is discarded on arrival, so pages from two different effective
//! queries can never coexist in the list.

use liftoff_core::LaunchRecord;

/// Default page size for the launches listing.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One dispatched page read, to be executed by a background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Feed session the request belongs to.
    pub session: u64,
    /// Zero-based record offset.
    pub offset: usize,
    /// Page size.
    pub limit: usize,
    /// Server-side mission-name filter, omitted when the query is empty.
    pub mission_name: Option<String>,
}

/// Pagination state for the launch feed.
#[derive(Debug)]
pub struct FeedState {
    /// Launches accumulated so far, in server order. Append-only within a
    /// session; cleared by `reset_session`.
    pub launches: Vec<LaunchRecord>,
    /// Offset of the next unfetched record.
    pub next_offset: usize,
    /// False once a fetched page came back shorter than the page size.
    /// One-way latch until the session resets.
    pub has_more: bool,
    /// True while a fetch is in flight. Mutual-exclusion gate, not a counter.
    pub is_loading: bool,
    /// Message of the last failed fetch, cleared on success, retry, or reset.
    pub error: Option<String>,
    session: u64,
    page_size: usize,
}

impl FeedState {
    pub fn new(page_size: usize) -> Self {
        Self {
            launches: Vec::new(),
            next_offset: 0,
            has_more: true,
            is_loading: false,
            error: None,
            session: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current session id, bumped on every reset.
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn len(&self) -> usize {
        self.launches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.launches.is_empty()
    }

    /// Gate and dispatch a page read.
    ///
    /// No-op (returns `None`) while a fetch is in flight or after the feed
    /// is exhausted; otherwise takes the loading gate and returns the
    /// request for the current cursor position. The gate is released by
    /// whichever of [`apply_page`](Self::apply_page) /
    /// [`apply_failure`](Self::apply_failure) arrives for this session.
    pub fn begin_fetch(&mut self, query: &str) -> Option<PageRequest> {
        if self.is_loading || !self.has_more {
            return None;
        }
        self.is_loading = true;
        Some(PageRequest {
            session: self.session,
            offset: self.next_offset,
            limit: self.page_size,
            mission_name: (!query.is_empty()).then(|| query.to_string()),
        })
    }

    /// Append a successfully fetched page.
    ///
    /// Returns false (and changes nothing) when `session` is not the
    /// current one -- the response belongs to a query that has since been
    /// superseded. A short page latches `has_more`; the offset advances by
    /// the page size either way so the cursor stays consistent.
    pub fn apply_page(&mut self, session: u64, page: Vec<LaunchRecord>) -> bool {
        if session != self.session {
            tracing::debug!(session, current = self.session, "discarding stale page");
            return false;
        }
        if page.len() < self.page_size {
            self.has_more = false;
        }
        self.launches.extend(page);
        self.next_offset += self.page_size;
        self.is_loading = false;
        self.error = None;
        true
    }

    /// Record a failed fetch.
    ///
    /// Releases the loading gate and surfaces the error; `next_offset` and
    /// `has_more` stay untouched so a retry re-reads the same page. Stale
    /// sessions are discarded as in [`apply_page`](Self::apply_page).
    pub fn apply_failure(&mut self, session: u64, error: String) -> bool {
        if session != self.session {
            tracing::debug!(session, current = self.session, "discarding stale failure");
            return false;
        }
        self.is_loading = false;
        self.error = Some(error);
        true
    }

    /// Start a fresh session: empty list, cursor at zero, latch re-armed.
    ///
    /// Bumping the session id makes any still-in-flight fetch stale, so a
    /// late response cannot re-append pre-reset results.
    pub fn reset_session(&mut self) {
        self.launches.clear();
        self.next_offset = 0;
        self.has_more = true;
        self.is_loading = false;
        self.error = None;
        self.session += 1;
    }

    /// Drop the failure flag (before a retry).
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
