//! # GLIMMER Core
//!
//! The cursor trail simulation, with no notion of how it is drawn:
//! - Speed-driven spawning under a fixed population ceiling
//! - Tick-based lifetime with opacity derived from remaining life
//! - Gravity + friction integration
//! - O(n²) proximity pass (n is bounded by the ceiling)
//!
//! ## Tick Order
//!
//! ```text
//! pointer speed ──► spawn (if fast enough & room left)
//!        │
//!        ▼
//! previous pointer ← current pointer
//!        │
//!        ▼
//! integrate + age every particle ──► drop age <= 0
//!        │
//!        ▼
//! proximity links between survivors
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glimmer_core::TrailSimulation;
//! use glimmer_shared::{TrailConfig, Vec2};
//!
//! let config = TrailConfig { seed: Some(1), ..TrailConfig::default() };
//! let mut sim = TrailSimulation::new(&config);
//!
//! sim.pointer_moved(Vec2::new(100.0, 100.0));
//! sim.tick();
//! sim.pointer_moved(Vec2::new(110.0, 100.0));
//! let stats = sim.tick();
//! assert_eq!(stats.spawned, 3);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod particle;
pub mod pointer;
pub mod proximity;
pub mod simulation;
pub mod spawn;

pub use particle::Particle;
pub use pointer::PointerTracker;
pub use proximity::{find_links, Link};
pub use simulation::{TickStats, TrailSimulation};
pub use spawn::Spawner;
