//! Application state and logic.

use crate::catalog::{Catalog, Topic};
use crate::effects::ParticleBurst;
use crate::error::Result;
use crate::search::SearchState;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Purple dark theme.
    PurpleDark,
    /// Purple light theme.
    PurpleLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::PurpleDark => Theme::PurpleLight,
            Theme::PurpleLight => Theme::PurpleDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::PurpleDark => "Purple Dark",
            Theme::PurpleLight => "Purple Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The topic catalog.
    pub catalog: Catalog,
    /// Search state.
    pub search: SearchState,
    /// Id of the expanded topic, if any. At most one topic is expanded.
    pub expanded: Option<u32>,
    /// Cursor position within the filtered card list.
    pub cursor: usize,
    /// Index of the first card drawn, kept so the cursor stays on screen.
    pub scroll: usize,
    /// Current theme.
    pub theme: Theme,
    /// Particle burst animation state.
    pub burst: ParticleBurst,
    /// Status message.
    pub status: String,
    /// Last rendered viewport size, used to place the burst origin.
    pub viewport: (u16, u16),
}

impl App {
    /// Create a new application instance over the built-in catalog.
    pub fn new(theme: Theme, effects_disabled: bool) -> Result<Self> {
        let catalog = Catalog::builtin()?;
        let status = format!("{} topics", catalog.len());
        Ok(Self {
            catalog,
            search: SearchState::new(),
            expanded: None,
            cursor: 0,
            scroll: 0,
            theme,
            burst: ParticleBurst::new(effects_disabled),
            status,
            viewport: (80, 24),
        })
    }

    /// Topics visible under the current search term, in catalog order.
    pub fn filtered_topics(&self) -> Vec<&Topic> {
        self.catalog.filter(self.search.term())
    }

    /// Get the topic under the cursor.
    pub fn current_topic(&self) -> Option<&Topic> {
        self.filtered_topics().get(self.cursor).copied()
    }

    /// Toggle expansion of the topic under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(id) = self.current_topic().map(|t| t.id) {
            self.toggle_topic(id);
        }
    }

    /// Toggle expansion of a topic by id.
    ///
    /// Expanding a topic collapses any other; expanding fires the particle
    /// burst. The burst never affects the toggle outcome.
    pub fn toggle_topic(&mut self, id: u32) {
        if self.expanded == Some(id) {
            self.expanded = None;
            if let Some(topic) = self.catalog.get(id) {
                self.status = format!("Collapsed {}", topic.title);
            }
            return;
        }

        self.expanded = Some(id);
        if let Some(topic) = self.catalog.get(id) {
            self.status = format!("Expanded {}", topic.title);
            tracing::debug!("Expanded topic {}", topic.title);
        }

        let (w, h) = self.viewport;
        self.burst.spawn(w / 2, h * 3 / 5);
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Move the cursor up one card.
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor down one card.
    pub fn cursor_down(&mut self) {
        let count = self.filtered_topics().len();
        if self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the first card.
    pub fn goto_first(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the last visible card.
    pub fn goto_last(&mut self) {
        let count = self.filtered_topics().len();
        self.cursor = count.saturating_sub(1);
    }

    /// Keep the cursor inside the filtered list after the term changes.
    pub fn clamp_cursor(&mut self) {
        let count = self.filtered_topics().len();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
    }

    /// Handle Escape: collapse the expanded card, or clear the filter.
    pub fn dismiss(&mut self) {
        if let Some(id) = self.expanded.take() {
            if let Some(topic) = self.catalog.get(id) {
                self.status = format!("Collapsed {}", topic.title);
            }
        } else if self.search.has_term() {
            self.search.clear();
            self.clamp_cursor();
            self.status = "Filter cleared".to_string();
        }
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.burst.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(Theme::PurpleDark, true).unwrap()
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut app = app();
        assert_eq!(app.expanded, None);

        app.toggle_topic(3);
        assert_eq!(app.expanded, Some(3));

        app.toggle_topic(3);
        assert_eq!(app.expanded, None);
    }

    #[test]
    fn at_most_one_topic_is_expanded() {
        let mut app = app();
        app.toggle_topic(2);
        app.toggle_topic(5);
        assert_eq!(app.expanded, Some(5));
    }

    #[test]
    fn toggle_current_follows_the_filter() {
        let mut app = app();
        app.search.start();
        for c in "hash".chars() {
            app.search.input(c);
        }
        app.clamp_cursor();
        app.search.accept();

        app.toggle_current();
        assert_eq!(app.expanded, Some(7));
    }

    #[test]
    fn expansion_survives_being_filtered_out() {
        let mut app = app();
        app.toggle_topic(1);

        for c in "trees".chars() {
            app.search.input(c);
        }
        app.clamp_cursor();
        assert_eq!(app.filtered_topics().len(), 1);
        assert_eq!(app.expanded, Some(1));

        app.search.clear();
        app.clamp_cursor();
        assert_eq!(app.expanded, Some(1));
    }

    #[test]
    fn theme_cycle_is_an_involution() {
        let mut app = app();
        let original = app.theme;
        app.cycle_theme();
        assert_ne!(app.theme, original);
        app.cycle_theme();
        assert_eq!(app.theme, original);
    }

    #[test]
    fn cursor_is_clamped_when_the_filter_shrinks() {
        let mut app = app();
        app.goto_last();
        assert_eq!(app.cursor, 7);

        for c in "queues".chars() {
            app.search.input(c);
        }
        app.clamp_cursor();
        assert_eq!(app.cursor, 0);
        assert_eq!(app.current_topic().unwrap().id, 4);
    }

    #[test]
    fn dismiss_collapses_before_clearing_the_filter() {
        let mut app = app();
        for c in "s".chars() {
            app.search.input(c);
        }
        app.toggle_topic(3);

        app.dismiss();
        assert_eq!(app.expanded, None);
        assert!(app.search.has_term());

        app.dismiss();
        assert!(!app.search.has_term());
    }

    #[test]
    fn cursor_stops_at_list_edges() {
        let mut app = app();
        app.cursor_up();
        assert_eq!(app.cursor, 0);

        app.goto_last();
        app.cursor_down();
        assert_eq!(app.cursor, 7);
    }
}
