//! # GLIMMER Shared
//!
//! Plain data used by every other GLIMMER crate.
//!
//! ## RULE
//!
//! This crate must NEVER depend on:
//! - the particle engine
//! - the painter or any drawing surface
//! - any host environment
//!
//! If you need drawing types, put them in `glimmer_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;

pub use color::Color;
pub use config::{BlendMode, GlowConfig, LinkConfig, PhysicsConfig, SpawnConfig, SurfaceConfig, TrailConfig};
pub use error::{ConfigError, ConfigResult};
pub use math::Vec2;
