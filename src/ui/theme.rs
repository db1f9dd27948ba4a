//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Secondary text color (card descriptions).
    pub muted: Color,
    /// Detail text color (expanded card body).
    pub detail: Color,
    /// Border color.
    pub border: Color,
    /// Border color of the card under the cursor.
    pub cursor_border: Color,
    /// Background of the expanded card.
    pub expanded_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Particle colors, indexed by particle color id.
    pub particles: [Color; 4],
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::PurpleDark => Self {
                bg: Color::Rgb(17, 24, 39),
                text: Color::Rgb(229, 231, 235),
                heading: Color::Rgb(196, 181, 253),
                muted: Color::Rgb(156, 163, 175),
                detail: Color::Rgb(209, 213, 219),
                border: Color::Rgb(55, 65, 81),
                cursor_border: Color::Rgb(167, 139, 250),
                expanded_bg: Color::Rgb(46, 16, 101),
                status_fg: Color::Rgb(229, 231, 235),
                status_bg: Color::Rgb(31, 41, 55),
                particles: [
                    Color::Rgb(167, 139, 250),
                    Color::Rgb(244, 114, 182),
                    Color::Rgb(250, 204, 21),
                    Color::Rgb(248, 250, 252),
                ],
            },
            Theme::PurpleLight => Self {
                bg: Color::Rgb(250, 245, 255),
                text: Color::Rgb(88, 28, 135),
                heading: Color::Rgb(107, 33, 168),
                muted: Color::Rgb(107, 114, 128),
                detail: Color::Rgb(55, 65, 81),
                border: Color::Rgb(216, 180, 254),
                cursor_border: Color::Rgb(147, 51, 234),
                expanded_bg: Color::Rgb(243, 232, 255),
                status_fg: Color::Rgb(88, 28, 135),
                status_bg: Color::Rgb(233, 213, 255),
                particles: [
                    Color::Rgb(147, 51, 234),
                    Color::Rgb(236, 72, 153),
                    Color::Rgb(234, 88, 12),
                    Color::Rgb(88, 28, 135),
                ],
            },
        }
    }
}
