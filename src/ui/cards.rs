//! Card list rendering.

use super::ThemeColors;
use crate::app::App;
use crate::catalog::Topic;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the filtered card list.
pub(super) fn draw_cards(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let topics: Vec<Topic> = app.filtered_topics().into_iter().cloned().collect();

    if topics.is_empty() {
        draw_empty(f, app.search.term(), area, colors);
        return;
    }

    let heights: Vec<u16> = topics
        .iter()
        .map(|t| card_height(t, app.expanded, area.width))
        .collect();

    // Scroll so the card under the cursor stays on screen.
    if app.scroll > app.cursor {
        app.scroll = app.cursor;
    }
    while app.scroll < app.cursor {
        let visible: u16 = heights[app.scroll..=app.cursor].iter().sum();
        if visible <= area.height {
            break;
        }
        app.scroll += 1;
    }

    let mut y = area.y;
    for (idx, topic) in topics.iter().enumerate().skip(app.scroll) {
        if y >= area.bottom() {
            break;
        }
        let height = heights[idx].min(area.bottom() - y);
        let card_area = Rect::new(area.x, y, area.width, height);
        draw_card(
            f,
            topic,
            idx == app.cursor,
            app.expanded == Some(topic.id),
            card_area,
            colors,
        );
        y += height;
    }
}

fn draw_card(
    f: &mut Frame<'_>,
    topic: &Topic,
    under_cursor: bool,
    expanded: bool,
    area: Rect,
    colors: &ThemeColors,
) {
    let inner_width = usize::from(area.width.saturating_sub(2).max(1));

    let chevron = if expanded { "▼" } else { "▶" };
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} {} ", topic.icon.glyph(), topic.title),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(chevron, Style::default().fg(colors.muted)),
    ])];

    for row in wrap_text(topic.description, inner_width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(colors.muted),
        )));
    }

    if expanded {
        lines.push(Line::from(""));
        for row in wrap_text(topic.details, inner_width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(colors.detail),
            )));
        }
    }

    let border_style = if under_cursor {
        Style::default()
            .fg(colors.cursor_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.border)
    };

    let bg = if expanded { colors.expanded_bg } else { colors.bg };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(bg)),
    );

    f.render_widget(paragraph, area);
}

fn draw_empty(f: &mut Frame<'_>, term: &str, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(format!("No topics match '{}'", term))
        .style(Style::default().fg(colors.muted))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(paragraph, area);
}

/// Full height of a card: borders, title row, description and details.
fn card_height(topic: &Topic, expanded: Option<u32>, width: u16) -> u16 {
    let inner = usize::from(width.saturating_sub(2).max(1));
    let mut rows = 1 + wrap_text(topic.description, inner).len();
    if expanded == Some(topic.id) {
        rows += 1 + wrap_text(topic.details, inner).len();
    }
    (rows + 2) as u16
}

/// Greedy word wrap; rendering uses the exact same rows as `card_height`.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}
