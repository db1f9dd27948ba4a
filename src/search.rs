//! Search functionality.
//!
//! The search term filters the card list live: every edit to the buffer is
//! immediately reflected in the visible cards. Accepting keeps the term,
//! cancelling clears it.

/// Search state.
#[derive(Debug)]
pub struct SearchState {
    is_active: bool,
    term: String,
}

impl SearchState {
    /// Create a new search state.
    pub fn new() -> Self {
        Self {
            is_active: false,
            term: String::new(),
        }
    }

    /// Check if search input mode is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Enter search input mode, editing the current term.
    pub fn start(&mut self) {
        self.is_active = true;
    }

    /// Add a character to the search term.
    pub fn input(&mut self, c: char) {
        self.term.push(c);
    }

    /// Remove the last character from the search term.
    pub fn backspace(&mut self) {
        self.term.pop();
    }

    /// Leave search input mode, keeping the current term.
    pub fn accept(&mut self) {
        self.is_active = false;
    }

    /// Leave search input mode and clear the term.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.term.clear();
    }

    /// Clear the term without changing input mode.
    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// Get the current search term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Check if a filter is in effect.
    pub fn has_term(&self) -> bool {
        !self.term.is_empty()
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
    use pretty_assertions::assert_eq;

    #[test]
    fn editing_builds_the_term() {
        let mut search = SearchState::new();
        search.start();
        assert!(search.is_active());

        search.input('a');
        search.input('r');
        search.input('r');
        assert_eq!(search.term(), "arr");

        search.backspace();
        assert_eq!(search.term(), "ar");
    }

    #[test]
    fn accept_keeps_term_cancel_clears_it() {
        let mut search = SearchState::new();
        search.start();
        search.input('q');
        search.accept();
        assert!(!search.is_active());
        assert_eq!(search.term(), "q");

        search.start();
        search.cancel();
        assert!(!search.is_active());
        assert_eq!(search.term(), "");
    }

    #[test]
    fn backspace_on_empty_term_is_a_no_op() {
        let mut search = SearchState::new();
        search.start();
        search.backspace();
        assert_eq!(search.term(), "");
    }
}
