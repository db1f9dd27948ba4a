//! Particle burst overlay.

use super::ThemeColors;
use crate::effects::ParticleBurst;
use ratatui::{style::Style, Frame};

/// Draw the particle burst over the already-rendered frame.
pub(super) fn draw_burst(f: &mut Frame<'_>, burst: &ParticleBurst, colors: &ThemeColors) {
    let area = f.area();
    let buf = f.buffer_mut();

    for particle in burst.particles() {
        if particle.x < 0.0 || particle.y < 0.0 {
            continue;
        }
        let x = particle.x as u16;
        let y = particle.y as u16;
        if x >= area.right() || y >= area.bottom() {
            continue;
        }

        let color = colors.particles[particle.color % colors.particles.len()];
        buf.set_string(x, y, particle.glyph(), Style::default().fg(color));
    }
}
