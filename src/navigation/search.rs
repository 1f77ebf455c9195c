//! Search text input.

/// Search input state.
///
/// While editing, the buffer is the live search term so results narrow on
/// every keystroke. Cancelling restores the term in effect before editing.
#[derive(Debug)]
pub struct SearchState {
    is_active: bool,
    buffer: String,
    term: String,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self {
            is_active: false,
            buffer: String::new(),
            term: String::new(),
        }
    }

    /// Create a search state with a committed term.
    pub fn with_term(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::new()
        }
    }

    /// Check if search is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start editing, seeded with the current term.
    pub fn start(&mut self) {
        self.is_active = true;
        self.buffer = self.term.clone();
    }

    /// Add a character to the search buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the search buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Commit the buffer as the search term. An empty buffer clears the term.
    pub fn submit(&mut self) {
        self.term = std::mem::take(&mut self.buffer);
        self.is_active = false;
    }

    /// Abandon editing and keep the previous term.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
    }

    /// Drop the committed term.
    pub fn clear(&mut self) {
        self.term.clear();
        self.buffer.clear();
        self.is_active = false;
    }

    /// The term filtering should use right now.
    pub fn effective_term(&self) -> &str {
        if self.is_active {
            &self.buffer
        } else {
            &self.term
        }
    }

    /// Get the search buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the committed search term.
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_is_live_and_cancel_restores() {
        let mut search = SearchState::with_term("asam");
        search.start();
        search.backspace();
        search.backspace();
        search.backspace();
        search.backspace();
        search.input('n');
        assert_eq!(search.effective_term(), "n");

        search.cancel();
        assert_eq!(search.effective_term(), "asam");
    }

    #[test]
    fn submit_commits_buffer() {
        let mut search = SearchState::new();
        search.start();
        for c in "naoh".chars() {
            search.input(c);
        }
        search.submit();
        assert!(!search.is_active());
        assert_eq!(search.term(), "naoh");

        search.start();
        search.clear();
        assert_eq!(search.effective_term(), "");
    }
}
