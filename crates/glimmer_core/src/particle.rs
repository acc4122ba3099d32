//! A single decaying, moving point of the trail.

use glimmer_shared::{Color, PhysicsConfig, Vec2};

/// One live particle.
///
/// `size`, `max_age` and `color` are fixed at creation. Only position,
/// velocity and age change, once per tick, in [`Particle::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Screen position (px).
    position: Vec2,
    /// Velocity (px/tick).
    velocity: Vec2,
    /// Remaining lifetime in ticks.
    age: u32,
    /// Lifetime at creation in ticks, never zero.
    max_age: u32,
    /// Base radius (px).
    size: f32,
    /// Palette entry.
    color: Color,
    /// Cached `age / max_age`.
    opacity: f32,
}

impl Particle {
    /// Creates a particle at full life.
    ///
    /// A `max_age` of zero is bumped to one tick.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, max_age: u32, size: f32, color: Color) -> Self {
        let max_age = max_age.max(1);
        Self {
            position,
            velocity,
            age: max_age,
            max_age,
            size,
            color,
            opacity: 1.0,
        }
    }

    /// Advances one tick and reports whether the particle survives.
    ///
    /// Order: move by velocity, apply gravity, apply friction, age by one.
    pub fn step(&mut self, physics: &PhysicsConfig) -> bool {
        self.position += self.velocity;
        self.velocity.y += physics.gravity;
        self.velocity.x *= physics.friction;
        if physics.damp_vertical {
            self.velocity.y *= physics.friction;
        }

        self.age = self.age.saturating_sub(1);
        self.opacity = self.life_fraction();
        self.is_alive()
    }

    /// `age / max_age`, clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn life_fraction(&self) -> f32 {
        (self.age as f32 / self.max_age as f32).clamp(0.0, 1.0)
    }

    /// Still has ticks left?
    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.age > 0
    }

    /// Current position.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Remaining ticks.
    #[inline]
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Lifetime at creation.
    #[inline]
    #[must_use]
    pub const fn max_age(&self) -> u32 {
        self.max_age
    }

    /// Base radius.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> f32 {
        self.size
    }

    /// Palette colour.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Opacity as of the last tick.
    #[inline]
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }
}
