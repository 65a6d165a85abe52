//! Page cursor history.
//!
//! Result pages are never cached: moving backward replays the exact cursor
//! that fetched the page originally, so the history only has to remember
//! cursors.

/// Cursor meaning "first page, no pagination token".
pub const SENTINEL_CURSOR: &str = "";

/// Ordered history of page cursors for one search.
///
/// Index 0 always holds [`SENTINEL_CURSOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTokenStack {
    tokens: Vec<String>,
    current: usize,
}

impl PageTokenStack {
    pub fn new() -> Self {
        Self {
            tokens: vec![SENTINEL_CURSOR.to_string()],
            current: 0,
        }
    }

    /// Clear to the sentinel alone, on page 0. Called for every new search,
    /// never for pagination.
    pub fn reset(&mut self) {
        self.tokens.truncate(1);
        self.tokens[0].clear();
        self.current = 0;
    }

    /// Store `cursor` as the page after the current one and move to it.
    ///
    /// Any history beyond the current page is dropped first.
    pub fn record_forward(&mut self, cursor: impl Into<String>) {
        self.tokens.truncate(self.current + 1);
        self.tokens.push(cursor.into());
        self.current += 1;
    }

    /// Move back one page, returning the cursor that fetches it.
    pub fn step_back(&mut self) -> Option<&str> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.cursor_for(self.current)
    }

    /// The cursor for page `index`: the sentinel for 0, otherwise the
    /// stored cursor, or `None` past the end of the history.
    pub fn cursor_for(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// The cursor that fetches the current page.
    pub fn current_cursor(&self) -> &str {
        &self.tokens[self.current]
    }

    /// Zero-based index of the current page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Number of pages in the history.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for PageTokenStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_sentinel() {
        let stack = PageTokenStack::new();
        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.cursor_for(0), Some(SENTINEL_CURSOR));
        assert_eq!(stack.current_cursor(), "");
        assert!(!stack.can_go_back());
    }

    #[test]
    fn forward_then_back_replays_first_page() {
        let mut stack = PageTokenStack::new();
        stack.record_forward("T1");
        assert_eq!(stack.current_index(), 1);
        assert_eq!(stack.current_cursor(), "T1");

        assert_eq!(stack.step_back(), Some(SENTINEL_CURSOR));
        assert_eq!(stack.current_index(), 0);
        assert_eq!(stack.cursor_for(0), Some(""));
    }

    #[test]
    fn back_from_first_page_is_none() {
        let mut stack = PageTokenStack::new();
        assert_eq!(stack.step_back(), None);
        assert_eq!(stack.current_index(), 0);
    }

    #[test]
    fn cursor_for_each_page() {
        let mut stack = PageTokenStack::new();
        stack.record_forward("T1");
        stack.record_forward("T2");

        assert_eq!(stack.cursor_for(0), Some(""));
        assert_eq!(stack.cursor_for(1), Some("T1"));
        assert_eq!(stack.cursor_for(2), Some("T2"));
        assert_eq!(stack.cursor_for(3), None);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn forward_after_back_replaces_history() {
        let mut stack = PageTokenStack::new();
        stack.record_forward("T1");
        stack.record_forward("T2");
        stack.step_back();
        stack.step_back();

        stack.record_forward("T1b");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.current_cursor(), "T1b");
        assert_eq!(stack.cursor_for(2), None);
    }

    #[test]
    fn reset_clears_to_sentinel() {
        let mut stack = PageTokenStack::new();
        stack.record_forward("T1");
        stack.record_forward("T2");

        stack.reset();
        assert_eq!(stack, PageTokenStack::new());
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());
    }
}
