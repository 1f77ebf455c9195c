//! Cursor over the filtered results.

/// Results list navigation state.
///
/// Holds catalog indices of the records currently shown, so the view can be
/// recomputed per query without borrowing the catalog.
#[derive(Debug)]
pub struct ResultsState {
    /// Catalog indices of matching records, in catalog order.
    indices: Vec<usize>,
    /// Cursor position (index into `indices`).
    cursor: usize,
    /// Scroll offset for the list view.
    scroll_offset: usize,
    /// Details panel scroll offset.
    pub details_scroll: u16,
}

impl ResultsState {
    /// Create an empty results state.
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            details_scroll: 0,
        }
    }

    /// Replace the result set, keeping the cursor on the same record if it
    /// is still present.
    pub fn set_results(&mut self, indices: Vec<usize>) {
        let current = self.current_index();
        self.indices = indices;
        self.cursor = current
            .and_then(|idx| self.indices.iter().position(|&i| i == idx))
            .unwrap_or(0);
        if self.current_index() != current {
            self.details_scroll = 0;
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
    }

    /// Move the cursor up one position.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.details_scroll = 0;
        }
    }

    /// Move the cursor down one position.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.indices.len() {
            self.cursor += 1;
            self.details_scroll = 0;
        }
    }

    /// Go to the first result.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
        self.details_scroll = 0;
    }

    /// Go to the last result.
    pub fn goto_last(&mut self) {
        if !self.indices.is_empty() {
            self.cursor = self.indices.len() - 1;
            self.details_scroll = 0;
        }
    }

    /// Adjust scroll to keep cursor visible.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }

        if self.cursor >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.saturating_sub(viewport_height - 1);
        }
    }

    /// Get the current scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Catalog index of the record under the cursor.
    pub fn current_index(&self) -> Option<usize> {
        self.indices.get(self.cursor).copied()
    }

    /// Catalog indices of all results.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Scroll details down.
    pub fn scroll_details_down(&mut self, step: u16) {
        self.details_scroll = self.details_scroll.saturating_add(step);
    }

    /// Scroll details up.
    pub fn scroll_details_up(&mut self, step: u16) {
        self.details_scroll = self.details_scroll.saturating_sub(step);
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}
