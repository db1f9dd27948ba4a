//! Top-level view layout: header, search box, cards, status and keymap bars.

use super::{cards, keymap_bar, particles, status_bar, ThemeColors};
use crate::app::{App, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the main view.
pub(super) fn draw_view(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);
    let area = f.area();
    app.viewport = (area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Paint the full background first so every row picks up the theme.
    let backdrop = Block::default().style(Style::default().bg(colors.bg));
    f.render_widget(backdrop, area);

    draw_header(f, app, chunks[0], &colors);
    draw_search_box(f, app, chunks[1], &colors);
    cards::draw_cards(f, app, chunks[2], &colors);
    status_bar::draw_status(f, app, chunks[3], &colors);
    keymap_bar::draw_keymap(f, app.search.is_active(), chunks[4], &colors);

    particles::draw_burst(f, &app.burst, &colors);
}

fn draw_header(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let theme_badge = match app.theme {
        Theme::PurpleDark => "☾ dark",
        Theme::PurpleLight => "☀ light",
    };

    let line = Line::from(vec![
        Span::styled(
            " Awesome DSA Explorer ",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {}", theme_badge),
            Style::default().fg(colors.muted),
        ),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(colors.bg));
    f.render_widget(paragraph, area);
}

fn draw_search_box(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let (text, style) = if app.search.is_active() {
        (
            format!("🔍 {}▌", app.search.term()),
            Style::default().fg(colors.text),
        )
    } else if app.search.has_term() {
        (
            format!("🔍 {}", app.search.term()),
            Style::default().fg(colors.text),
        )
    } else {
        (
            "🔍 Search DSA topics... (press /)".to_string(),
            Style::default().fg(colors.muted),
        )
    };

    let border_style = if app.search.is_active() {
        Style::default().fg(colors.cursor_border)
    } else {
        Style::default().fg(colors.border)
    };

    let paragraph = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}
