//! # GLIMMER UI
//!
//! Everything between the simulation and the pixels:
//! - `TrailPainter` turns particles and links into draw commands
//! - `DrawBatch` collects one frame's commands
//! - `Surface` is whatever the host draws on
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  TrailSimulation ──► TrailPainter ──► DrawBatch          │
//! │                                          │               │
//! │                         Surface::clear ──┤               │
//! │                         Surface::submit ◄┘               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Per particle: a glow-blurred core disc, then a larger faint halo.
//! After all particles: one line per proximity link.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod painter;
pub mod render;
pub mod surface;

pub use painter::TrailPainter;
pub use render::{DrawBatch, DrawCommand};
pub use surface::{
    RecordingSurface, Surface, SurfaceDescriptor, SurfaceError, SurfaceLog, SurfaceResult, Viewport,
};
