//! User interface rendering.

mod cards;
mod keymap_bar;
mod particles;
mod status_bar;
mod theme;
mod view;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    view::draw_view(f, app);
}
