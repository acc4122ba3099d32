//! Trail painter: simulation state in, draw commands out.
//!
//! Look per particle (opacity `o`, base radius `s`):
//!
//! | layer | radius              | alpha            | blur        |
//! |-------|---------------------|------------------|-------------|
//! | core  | `s * o`             | `o * core_alpha` | `core_blur` |
//! | halo  | `s * o * halo_scale`| `o * halo_alpha` | `halo_blur` |
//!
//! Links take the first particle's colour with alpha
//! `strength * links.max_alpha`.

use glimmer_core::{Link, Particle, TrailSimulation};
use glimmer_shared::constants::MAX_PARTICLES_LIMIT;
use glimmer_shared::{GlowConfig, LinkConfig, TrailConfig};

use crate::render::{DrawBatch, DrawCommand};

/// Reuses one [`DrawBatch`] across frames.
#[derive(Debug, Clone)]
pub struct TrailPainter {
    /// Disc and halo look.
    glow: GlowConfig,
    /// Link look.
    links: LinkConfig,
    /// This frame's commands.
    batch: DrawBatch,
}

impl TrailPainter {
    /// Creates a painter for the given config.
    #[must_use]
    pub fn new(config: &TrailConfig) -> Self {
        // Two discs per particle; links grow on demand
        let capacity = config.spawn.max_particles.min(MAX_PARTICLES_LIMIT) * 2;
        Self {
            glow: config.glow.clone(),
            links: config.links.clone(),
            batch: DrawBatch::with_capacity(capacity, config.surface.blend),
        }
    }

    /// Paints the simulation's current particles and links.
    pub fn paint(&mut self, simulation: &TrailSimulation) -> &DrawBatch {
        self.paint_parts(simulation.particles(), simulation.links())
    }

    /// Paints explicit particles and links (links index into `particles`).
    ///
    /// Links with out-of-range indices are skipped.
    pub fn paint_parts(&mut self, particles: &[Particle], links: &[Link]) -> &DrawBatch {
        self.batch.clear();

        for particle in particles {
            self.paint_particle(particle);
        }

        for link in links {
            if let (Some(a), Some(b)) = (particles.get(link.a), particles.get(link.b)) {
                let alpha = link.strength * self.links.max_alpha;
                self.batch.push(DrawCommand::Line {
                    from: a.position(),
                    to: b.position(),
                    color: a.color().with_alpha(a.color().a * alpha),
                    width: self.links.width,
                });
            }
        }

        &self.batch
    }

    fn paint_particle(&mut self, particle: &Particle) {
        let opacity = particle.opacity();
        let color = particle.color();
        let radius = particle.size() * opacity;

        self.batch.push(DrawCommand::Disc {
            center: particle.position(),
            radius,
            color: color.with_alpha(color.a * opacity * self.glow.core_alpha),
            blur: self.glow.core_blur,
        });
        self.batch.push(DrawCommand::Disc {
            center: particle.position(),
            radius: radius * self.glow.halo_scale,
            color: color.with_alpha(color.a * opacity * self.glow.halo_alpha),
            blur: self.glow.halo_blur,
        });
    }
}
