//! Decorative particle burst fired when a card expands.
//!
//! Purely cosmetic: the burst is spawned fire-and-forget and advanced by the
//! event-loop tick. It can be disabled entirely, in which case spawning is a
//! no-op, so application logic never depends on it.

use rand::Rng;

/// Number of particles per burst.
const PARTICLE_COUNT: usize = 60;

/// Ticks a particle lives before it is removed.
const PARTICLE_LIFETIME: u8 = 12;

/// Horizontal spread of initial velocities, in cells per tick.
const SPREAD: f32 = 3.5;

/// Downward acceleration applied each tick.
const GRAVITY: f32 = 0.35;

/// A single short-lived particle.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Column position.
    pub x: f32,
    /// Row position.
    pub y: f32,
    vx: f32,
    vy: f32,
    /// Remaining ticks to live.
    pub life: u8,
    /// Index into the theme's particle palette.
    pub color: usize,
}

impl Particle {
    /// Glyph for the particle's current age.
    pub fn glyph(&self) -> &'static str {
        match self.life {
            0..=3 => "·",
            4..=7 => "∙",
            _ => "•",
        }
    }
}

/// Particle burst state.
#[derive(Debug, Default)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
    disabled: bool,
}

impl ParticleBurst {
    /// Create a new, empty burst.
    pub fn new(disabled: bool) -> Self {
        Self {
            particles: Vec::new(),
            disabled,
        }
    }

    /// Spawn a burst centered on the given cell.
    ///
    /// Does nothing when effects are disabled; a missing flourish must never
    /// affect the expansion itself.
    pub fn spawn(&mut self, origin_x: u16, origin_y: u16) {
        if self.disabled {
            return;
        }

        let mut rng = rand::thread_rng();
        for i in 0..PARTICLE_COUNT {
            let vx = rng.gen_range(-SPREAD..SPREAD);
            let vy = rng.gen_range(-2.0..-0.3);
            self.particles.push(Particle {
                x: f32::from(origin_x),
                y: f32::from(origin_y),
                vx,
                vy,
                life: rng.gen_range(PARTICLE_LIFETIME / 2..=PARTICLE_LIFETIME),
                color: i % 4,
            });
        }
    }

    /// Advance the animation by one tick.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.vy += GRAVITY;
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0 && p.y >= 0.0);
    }

    /// Live particles, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Check if the animation has finished.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_creates_particles() {
        let mut burst = ParticleBurst::new(false);
        burst.spawn(40, 10);
        assert_eq!(burst.particles().len(), PARTICLE_COUNT);
        assert!(!burst.is_idle());
    }

    #[test]
    fn disabled_burst_spawns_nothing() {
        let mut burst = ParticleBurst::new(true);
        burst.spawn(40, 10);
        assert!(burst.is_idle());
    }

    #[test]
    fn particles_die_out_within_their_lifetime() {
        let mut burst = ParticleBurst::new(false);
        burst.spawn(40, 10);
        for _ in 0..=PARTICLE_LIFETIME {
            burst.tick();
        }
        assert!(burst.is_idle());
    }

    #[test]
    fn tick_on_idle_burst_is_a_no_op() {
        let mut burst = ParticleBurst::new(false);
        burst.tick();
        assert!(burst.is_idle());
    }
}
