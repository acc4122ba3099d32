//! The trail simulation: one owner, one tick per displayed frame.

use glimmer_shared::constants::MAX_PARTICLES_LIMIT;
use glimmer_shared::{PhysicsConfig, TrailConfig, Vec2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::particle::Particle;
use crate::pointer::PointerTracker;
use crate::proximity::{find_links, Link};
use crate::spawn::Spawner;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickStats {
    /// Tick number, starting at 1.
    pub tick: u64,
    /// Pointer distance travelled since the previous tick.
    pub pointer_speed: f32,
    /// Particles born this tick.
    pub spawned: usize,
    /// Particles that ran out of life this tick.
    pub expired: usize,
    /// Particles alive after the tick.
    pub alive: usize,
    /// Proximity links between survivors.
    pub links: usize,
}

/// Owns the live particle set and the pointer samples.
///
/// Nothing else reads or writes either; the host feeds pointer positions
/// in through [`TrailSimulation::pointer_moved`] and drives
/// [`TrailSimulation::tick`] once per frame.
#[derive(Debug, Clone)]
pub struct TrailSimulation {
    /// Spawn rule.
    spawner: Spawner,
    /// Integration parameters.
    physics: PhysicsConfig,
    /// Link distance threshold.
    link_radius: f32,
    /// Live particles, oldest first.
    particles: Vec<Particle>,
    /// Links between live particles, rebuilt every tick.
    links: Vec<Link>,
    /// Pointer samples.
    pointer: PointerTracker,
    /// Spawn randomness.
    rng: ChaCha8Rng,
    /// Stats of the last tick.
    stats: TickStats,
}

impl TrailSimulation {
    /// Creates an empty simulation. The config is expected to be validated.
    #[must_use]
    pub fn new(config: &TrailConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let ceiling = config.spawn.max_particles;

        Self {
            spawner: Spawner::new(config.spawn.clone(), config.palette.clone()),
            physics: config.physics.clone(),
            link_radius: config.links.radius,
            particles: Vec::with_capacity(ceiling.min(MAX_PARTICLES_LIMIT)),
            links: Vec::new(),
            pointer: PointerTracker::new(),
            rng,
            stats: TickStats::default(),
        }
    }

    /// Records the latest pointer position.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.set_position(position);
    }

    /// Runs one tick: spawn, advance the pointer, integrate, expire, link.
    pub fn tick(&mut self) -> TickStats {
        let pointer_speed = self.pointer.speed();

        let mut spawned = 0;
        if let Some(origin) = self.pointer.position() {
            spawned = self.spawner.spawn_count(pointer_speed, self.particles.len());
            for _ in 0..spawned {
                let particle = self.spawner.spawn(&mut self.rng, origin, pointer_speed);
                self.particles.push(particle);
            }
        }

        self.pointer.advance();

        let before = self.particles.len();
        let physics = &self.physics;
        self.particles.retain_mut(|p| p.step(physics));
        let expired = before - self.particles.len();

        find_links(&self.particles, self.link_radius, &mut self.links);

        self.stats = TickStats {
            tick: self.stats.tick + 1,
            pointer_speed,
            spawned,
            expired,
            alive: self.particles.len(),
            links: self.links.len(),
        };

        tracing::trace!(
            tick = self.stats.tick,
            speed = pointer_speed,
            spawned,
            expired,
            alive = self.stats.alive,
            links = self.stats.links,
            "trail tick"
        );

        self.stats
    }

    /// Live particles as of the last tick.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Links between live particles as of the last tick.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Pointer samples.
    #[must_use]
    pub const fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Stats of the last tick.
    #[must_use]
    pub const fn stats(&self) -> TickStats {
        self.stats
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// No live particles?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Population ceiling.
    #[must_use]
    pub const fn max_particles(&self) -> usize {
        self.spawner.max_particles()
    }

    /// Drops every particle and forgets the pointer.
    pub fn clear(&mut self) {
        self.particles.clear();
        self.links.clear();
        self.pointer.reset();
        self.stats = TickStats::default();
    }
}
