//! Status bar UI component.

use super::ThemeColors;
use crate::app::App;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = if app.search.is_active() {
        format!("/{}", app.search.term())
    } else if app.search.has_term() {
        format!(
            "{}/{} topics match '{}'",
            app.filtered_topics().len(),
            app.catalog.len(),
            app.search.term()
        )
    } else {
        app.status.clone()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
