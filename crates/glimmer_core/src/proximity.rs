//! Proximity pass: which pairs of particles get a connecting line.
//!
//! Brute force over all unordered pairs. With the default ceiling of 80
//! that is at most 3160 distance checks per tick.

use crate::particle::Particle;

/// A line between two live particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    /// Index of the first particle (always `< b`).
    pub a: usize,
    /// Index of the second particle.
    pub b: usize,
    /// Euclidean distance between them (px).
    pub distance: f32,
    /// `(1 - distance / radius) * min(opacity_a, opacity_b)`, in `[0, 1]`.
    pub strength: f32,
}

/// Fills `out` with every pair strictly closer than `radius`.
///
/// `out` is cleared first so callers can reuse one buffer across ticks.
pub fn find_links(particles: &[Particle], radius: f32, out: &mut Vec<Link>) {
    out.clear();
    if radius.is_nan() || radius <= 0.0 {
        return;
    }

    let radius_sq = radius * radius;
    for (a, first) in particles.iter().enumerate() {
        for (offset, second) in particles[a + 1..].iter().enumerate() {
            let distance_sq = first.position().distance_squared(second.position());
            if distance_sq >= radius_sq {
                continue;
            }

            let distance = distance_sq.sqrt();
            let fade = first.opacity().min(second.opacity());
            out.push(Link {
                a,
                b: a + 1 + offset,
                distance,
                strength: (1.0 - distance / radius) * fade,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_shared::{Color, Vec2};

    fn at(x: f32, y: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::ZERO, 10, 1.0, Color::WHITE)
    }

    #[test]
    fn test_links_only_close_pairs() {
        // Pair 1: 30 px apart. Pair 2: 90 px apart, far from pair 1.
        let particles = vec![
            at(0.0, 0.0),
            at(30.0, 0.0),
            at(1000.0, 1000.0),
            at(1090.0, 1000.0),
        ];
        let mut links = Vec::new();
        find_links(&particles, 60.0, &mut links);

        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert_eq!(links[0].distance, 30.0);
        assert!((links[0].strength - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_radius_is_exclusive() {
        let particles = vec![at(0.0, 0.0), at(60.0, 0.0)];
        let mut links = Vec::new();
        find_links(&particles, 60.0, &mut links);
        assert!(links.is_empty());
    }

    #[test]
    fn test_nan_radius_links_nothing() {
        let particles = vec![at(0.0, 0.0), at(1.0, 0.0), at(2.0, 0.0)];
        let mut links = Vec::new();
        find_links(&particles, f32::NAN, &mut links);
        assert!(links.is_empty());
    }

    #[test]
    fn test_strength_uses_weaker_particle() {
        let mut faded = at(0.0, 0.0);
        let still = glimmer_shared::PhysicsConfig {
            gravity: 0.0,
            friction: 1.0,
            damp_vertical: false,
        };
        for _ in 0..5 {
            faded.step(&still); // opacity 0.5
        }
        let particles = vec![faded, at(0.0, 0.0)];
        let mut links = Vec::new();
        find_links(&particles, 60.0, &mut links);

        assert_eq!(links.len(), 1);
        assert!((links[0].strength - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_every_unordered_pair_once() {
        let particles: Vec<_> = (0..10).map(|i| at(i as f32, 0.0)).collect();
        let mut links = vec![Link { a: 9, b: 9, distance: 0.0, strength: 0.0 }];
        find_links(&particles, 60.0, &mut links);

        assert_eq!(links.len(), 45); // 10 choose 2, stale entry cleared
        assert!(links.iter().all(|l| l.a < l.b));
    }
}
