//! Speed-driven spawn rule.
//!
//! Faster pointer movement spawns more, faster particles, up to a
//! per-tick cap and the global population ceiling.

use std::f32::consts::TAU;

use glimmer_shared::{Color, SpawnConfig, Vec2};
use rand::Rng;

use crate::particle::Particle;

/// Decides how many particles to spawn and rolls their properties.
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Spawn parameters.
    config: SpawnConfig,
    /// Colours to pick from.
    palette: Vec<Color>,
}

impl Spawner {
    /// Creates a spawner. An empty palette falls back to white.
    #[must_use]
    pub fn new(config: SpawnConfig, palette: Vec<Color>) -> Self {
        Self { config, palette }
    }

    /// Population ceiling.
    #[must_use]
    pub const fn max_particles(&self) -> usize {
        self.config.max_particles
    }

    /// Number of particles to spawn this tick.
    ///
    /// Zero unless `speed` exceeds the threshold and the live set is below
    /// the ceiling. Otherwise `min(floor(speed * count_factor), max_per_tick)`,
    /// clamped to the room left under the ceiling.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn spawn_count(&self, speed: f32, live: usize) -> usize {
        if speed.is_nan() || speed <= self.config.threshold || live >= self.config.max_particles {
            return 0;
        }

        let wanted = (speed * self.config.count_factor).floor().max(0.0) as usize;
        let cap = usize::try_from(self.config.max_per_tick).unwrap_or(usize::MAX);
        wanted.min(cap).min(self.config.max_particles - live)
    }

    /// Rolls one particle near `origin` for a pointer moving at `speed`.
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R, origin: Vec2, speed: f32) -> Particle {
        let cfg = &self.config;

        let jitter = Vec2::new(
            (rng.gen::<f32>() - 0.5) * cfg.jitter,
            (rng.gen::<f32>() - 0.5) * cfg.jitter,
        );

        let angle = rng.gen::<f32>() * TAU;
        let base_speed = (speed * cfg.speed_factor).min(cfg.max_base_speed);
        let scale = lerp(cfg.speed_scale_min, cfg.speed_scale_max, rng.gen());
        let mut velocity = Vec2::from_angle(angle, base_speed * scale);
        velocity.y -= rng.gen::<f32>() * cfg.upward_kick;

        let span = cfg.lifetime_max.saturating_sub(cfg.lifetime_min).max(1);
        let max_age = cfg.lifetime_min + rng.gen_range(0..span);

        let size = lerp(cfg.size_min, cfg.size_max, rng.gen());

        let color = if self.palette.is_empty() {
            Color::WHITE
        } else {
            self.palette[rng.gen_range(0..self.palette.len())]
        };

        Particle::new(origin + jitter, velocity, max_age, size, color)
    }
}

/// `min + t * (max - min)` for `t` in `[0, 1)`.
fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + t * (max - min)
}
