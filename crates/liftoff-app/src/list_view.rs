//! Launch list viewport state - selection, scroll window, and the
//! near-bottom fetch trigger.
//!
//! The widget sets `visible_items` during render (items are variable height
//! when a details panel is open), the handlers move `selected` and keep the
//! window in range. `near_bottom` is the terminal equivalent of observing
//! the last rendered item: it holds when the window extended by a threshold
//! reaches the end of the filtered list, and is re-evaluated whenever the
//! viewport moves or a page is appended.

/// State for the launch list with viewport tracking.
#[derive(Debug)]
pub struct ListViewState {
    /// Index of the selected row in the filtered list.
    pub selected: usize,
    /// Index of the first visible item.
    pub offset: usize,
    /// Items currently on screen (set during render).
    pub visible_items: usize,
    /// Filtered list length (set whenever the list changes).
    pub total_items: usize,
    /// Flight number of the launch with an open details panel, if any.
    /// At most one panel is open; identity survives page appends.
    pub expanded: Option<u32>,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
            visible_items: 0,
            total_items: 0,
            expanded: None,
        }
    }

    /// Move the selection up by n rows
    pub fn cursor_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
        self.scroll_to_selected();
    }

    /// Move the selection down by n rows
    pub fn cursor_down(&mut self, n: usize) {
        let max = self.total_items.saturating_sub(1);
        self.selected = (self.selected + n).min(max);
        self.scroll_to_selected();
    }

    /// Jump to the first item
    pub fn cursor_to_top(&mut self) {
        self.selected = 0;
        self.scroll_to_selected();
    }

    /// Jump to the last loaded item
    pub fn cursor_to_bottom(&mut self) {
        self.selected = self.total_items.saturating_sub(1);
        self.scroll_to_selected();
    }

    /// Page up
    pub fn page_up(&mut self) {
        let page = self.visible_items.max(1);
        self.cursor_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.visible_items.max(1);
        self.cursor_down(page);
    }

    /// Record the new filtered list length, clamping the selection and
    /// window into range.
    pub fn set_total(&mut self, total: usize) {
        self.total_items = total;
        let max = total.saturating_sub(1);
        if self.selected > max {
            self.selected = max;
        }
        if self.offset > max {
            self.offset = max;
        }
    }

    /// Record how many items the last render fit on screen, then make sure
    /// the selection is inside the window.
    pub fn update_viewport(&mut self, visible: usize) {
        self.visible_items = visible;
        self.scroll_to_selected();
    }

    /// True when the window extended by `threshold` rows reaches the end of
    /// the list -- the last item is (about to be) on screen.
    pub fn near_bottom(&self, threshold: usize) -> bool {
        if self.total_items == 0 {
            return true;
        }
        self.offset + self.visible_items + threshold >= self.total_items
    }

    /// Toggle the details panel: same item collapses, a different one
    /// switches the single open panel over.
    pub fn toggle_expanded(&mut self, flight_number: u32) {
        if self.expanded == Some(flight_number) {
            self.expanded = None;
        } else {
            self.expanded = Some(flight_number);
        }
    }

    pub fn is_expanded(&self, flight_number: u32) -> bool {
        self.expanded == Some(flight_number)
    }

    /// Reset the window for a fresh session (keeps the expanded panel id).
    pub fn reset_window(&mut self) {
        self.selected = 0;
        self.offset = 0;
        self.total_items = 0;
    }

    fn scroll_to_selected(&mut self) {
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        let visible = self.visible_items.max(1);
        if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(total: usize, visible: usize) -> ListViewState {
        let mut list = ListViewState::new();
        list.set_total(total);
        list.update_viewport(visible);
        list
    }

    #[test]
    fn test_cursor_down_clamps_to_end() {
        let mut list = sized(5, 10);
        list.cursor_down(99);
        assert_eq!(list.selected, 4);
    }

    #[test]
    fn test_cursor_up_saturates_at_zero() {
        let mut list = sized(5, 10);
        list.cursor_up(3);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_window_follows_selection() {
        let mut list = sized(20, 5);
        list.cursor_down(9);
        assert_eq!(list.selected, 9);
        assert_eq!(list.offset, 5, "window scrolls so the selection is last visible");

        list.cursor_to_top();
        assert_eq!(list.offset, 0);
    }

    #[test]
    fn test_page_down_moves_by_viewport() {
        let mut list = sized(20, 5);
        list.page_down();
        assert_eq!(list.selected, 5);
        list.page_up();
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_set_total_clamps_selection() {
        let mut list = sized(20, 5);
        list.cursor_to_bottom();
        assert_eq!(list.selected, 19);
        list.set_total(3);
        assert_eq!(list.selected, 2);
        assert!(list.offset <= 2);
    }

    #[test]
    fn test_near_bottom_small_list() {
        let list = sized(2, 10);
        assert!(list.near_bottom(3));
    }

    #[test]
    fn test_near_bottom_empty_list() {
        let list = ListViewState::new();
        assert!(list.near_bottom(3));
    }

    #[test]
    fn test_near_bottom_large_list() {
        let mut list = sized(50, 10);
        assert!(!list.near_bottom(3));
        list.cursor_down(45);
        assert!(list.near_bottom(3));
    }

    #[test]
    fn test_toggle_expanded_is_exclusive() {
        let mut list = ListViewState::new();
        list.toggle_expanded(42);
        assert!(list.is_expanded(42));

        // Expanding another launch collapses the first.
        list.toggle_expanded(7);
        assert!(list.is_expanded(7));
        assert!(!list.is_expanded(42));

        // Toggling the open one collapses it.
        list.toggle_expanded(7);
        assert_eq!(list.expanded, None);
    }

    #[test]
    fn test_reset_window_keeps_expanded() {
        let mut list = sized(20, 5);
        list.toggle_expanded(42);
        list.cursor_down(10);
        list.reset_window();
        assert_eq!(list.selected, 0);
        assert_eq!(list.offset, 0);
        assert_eq!(list.total_items, 0);
        assert!(list.is_expanded(42));
    }
}
