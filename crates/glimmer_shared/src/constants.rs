//! # Tuned Trail Constants
//!
//! Defaults for [`crate::TrailConfig`]. These were tuned by eye, not
//! derived; every one of them can be overridden from a config file.
//!
//! Units: pixels, ticks (one tick = one displayed frame).

// =============================================================================
// SPAWNING
// =============================================================================

/// Pointer speed (px/tick) that must be exceeded before anything spawns.
pub const SPAWN_THRESHOLD: f32 = 2.0;

/// Ceiling on simultaneously live particles.
pub const MAX_PARTICLES: usize = 80;

/// Largest ceiling a config may ask for. The link pass is O(n²).
pub const MAX_PARTICLES_LIMIT: usize = 10_000;

/// Particles spawned per px/tick of pointer speed (before flooring).
pub const SPAWN_COUNT_FACTOR: f32 = 0.3;

/// Hard cap on particles spawned in a single tick.
pub const MAX_SPAWN_PER_TICK: u32 = 4;

/// Full width of the square spawn jitter around the pointer (±half).
pub const SPAWN_JITTER: f32 = 10.0;

/// Initial particle speed per px/tick of pointer speed.
pub const SPEED_FACTOR: f32 = 0.15;

/// Upper bound on the base initial speed before random scaling.
pub const MAX_BASE_SPEED: f32 = 3.0;

/// Random speed multiplier range, `[min, max)`.
pub const SPEED_SCALE_MIN: f32 = 0.5;
/// See [`SPEED_SCALE_MIN`].
pub const SPEED_SCALE_MAX: f32 = 2.5;

/// Upper bound of the random upward kick added at spawn.
pub const UPWARD_KICK: f32 = 0.5;

/// Lifetime range in ticks, `[min, max)`.
pub const LIFETIME_MIN: u32 = 20;
/// See [`LIFETIME_MIN`].
pub const LIFETIME_MAX: u32 = 60;

/// Base radius range in pixels, `[min, max)`.
pub const SIZE_MIN: f32 = 1.0;
/// See [`SIZE_MIN`].
pub const SIZE_MAX: f32 = 4.0;

// =============================================================================
// PHYSICS
// =============================================================================

/// Downward acceleration in px/tick².
pub const GRAVITY: f32 = 0.02;

/// Multiplicative velocity damping applied every tick.
pub const FRICTION: f32 = 0.98;

// =============================================================================
// PROXIMITY LINKS
// =============================================================================

/// Particles closer than this (px) get a connecting line.
pub const LINK_RADIUS: f32 = 60.0;

/// Alpha of a link between two touching, full-life particles.
pub const LINK_MAX_ALPHA: f32 = 0.2;

/// Link stroke width in pixels.
pub const LINK_WIDTH: f32 = 0.5;

// =============================================================================
// GLOW
// =============================================================================

/// Alpha multiplier of the core disc.
pub const CORE_ALPHA: f32 = 0.8;

/// Blur radius of the core disc.
pub const CORE_BLUR: f32 = 12.0;

/// Alpha multiplier of the halo disc.
pub const HALO_ALPHA: f32 = 0.3;

/// Blur radius of the halo disc.
pub const HALO_BLUR: f32 = 20.0;

/// Halo radius relative to the core radius.
pub const HALO_SCALE: f32 = 2.5;

// =============================================================================
// SURFACE
// =============================================================================

/// Stacking layer of the overlay surface (above page content).
pub const OVERLAY_LAYER: i32 = 60;

/// Neon palette, packed `0xRRGGBB`.
pub const PALETTE: [u32; 4] = [0x00_ff_88, 0x00_d4_ff, 0xff_00_ff, 0xff_dd_00];
