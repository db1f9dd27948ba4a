//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    search_active: bool,
    area: Rect,
    colors: &ThemeColors,
) {
    let keymap_text = if search_active {
        "Enter:accept | Esc:clear | Type to filter"
    } else {
        "q:quit | jk/↑↓:nav | Enter/Space:expand | /:search | T:theme | Esc:collapse"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
