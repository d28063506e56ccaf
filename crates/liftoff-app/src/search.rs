//! Search state: raw vs. effective query
//!
//! `raw` follows every keystroke; `committed` is the debounced value the
//! feed actually filters and fetches with. The two only meet when the
//! debouncer fires a `SearchCommitted` message.

/// Search query state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// The query as typed, updated synchronously on every keystroke.
    pub raw: String,
    /// The effective query, updated only after the debounce window.
    pub committed: String,
    /// Whether the search prompt currently has focus.
    pub is_active: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded query (CLI argument), already effective.
    pub fn with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            raw: query.clone(),
            committed: query,
            is_active: false,
        }
    }

    /// Record a keystroke's worth of raw input.
    pub fn set_raw(&mut self, text: String) {
        self.raw = text;
    }

    /// Promote a debounced value to the effective query.
    ///
    /// Returns false when the value equals the current effective query --
    /// the caller must not reset the session in that case.
    pub fn commit(&mut self, text: String) -> bool {
        if text == self.committed {
            return false;
        }
        self.committed = text;
        true
    }

    pub fn has_query(&self) -> bool {
        !self.raw.is_empty()
    }
}
