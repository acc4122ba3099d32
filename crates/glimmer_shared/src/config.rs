//! # Trail Configuration
//!
//! Loaded once at startup from TOML. Every section and field is optional;
//! anything missing falls back to [`crate::constants`].
//!
//! ```toml
//! palette = ["#00ff88", "#00d4ff", "#ff00ff", "#ffdd00"]
//! seed = 42
//!
//! [spawn]
//! threshold = 2.0
//! max_particles = 80
//!
//! [physics]
//! gravity = 0.02
//! friction = 0.98
//!
//! [links]
//! radius = 60.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants;
use crate::error::{ConfigError, ConfigResult};

/// Complete configuration of one cursor trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Colours new particles are drawn from, uniformly.
    pub palette: Vec<Color>,
    /// RNG seed; `None` seeds from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// When and how particles are born.
    pub spawn: SpawnConfig,
    /// Per-tick motion.
    pub physics: PhysicsConfig,
    /// Proximity lines.
    pub links: LinkConfig,
    /// Disc and halo look.
    pub glow: GlowConfig,
    /// Overlay surface properties.
    pub surface: SurfaceConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            palette: constants::PALETTE.iter().copied().map(Color::from_rgb_u32).collect(),
            seed: None,
            spawn: SpawnConfig::default(),
            physics: PhysicsConfig::default(),
            links: LinkConfig::default(),
            glow: GlowConfig::default(),
            surface: SurfaceConfig::default(),
        }
    }
}

impl TrailConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and any
    /// validation error from [`TrailConfig::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`TrailConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Serializes back to TOML.
    ///
    /// # Errors
    ///
    /// Only fails if the TOML serializer rejects a value, which the
    /// schema does not produce.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Checks every range the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        self.spawn.validate()?;
        self.physics.validate()?;
        self.links.validate()?;
        self.glow.validate()
    }
}

/// Spawn rule parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnConfig {
    /// Pointer speed (px/tick) that must be exceeded to spawn.
    pub threshold: f32,
    /// Ceiling on live particles.
    pub max_particles: usize,
    /// Spawned particles per px/tick of pointer speed.
    pub count_factor: f32,
    /// Cap on particles spawned per tick.
    pub max_per_tick: u32,
    /// Full width of the positional jitter square.
    pub jitter: f32,
    /// Initial speed per px/tick of pointer speed.
    pub speed_factor: f32,
    /// Cap on the base initial speed.
    pub max_base_speed: f32,
    /// Lower bound of the random speed multiplier.
    pub speed_scale_min: f32,
    /// Upper bound (exclusive) of the random speed multiplier.
    pub speed_scale_max: f32,
    /// Upper bound of the random upward kick.
    pub upward_kick: f32,
    /// Shortest lifetime in ticks.
    pub lifetime_min: u32,
    /// Longest lifetime in ticks (exclusive).
    pub lifetime_max: u32,
    /// Smallest base radius in pixels.
    pub size_min: f32,
    /// Largest base radius in pixels (exclusive).
    pub size_max: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            threshold: constants::SPAWN_THRESHOLD,
            max_particles: constants::MAX_PARTICLES,
            count_factor: constants::SPAWN_COUNT_FACTOR,
            max_per_tick: constants::MAX_SPAWN_PER_TICK,
            jitter: constants::SPAWN_JITTER,
            speed_factor: constants::SPEED_FACTOR,
            max_base_speed: constants::MAX_BASE_SPEED,
            speed_scale_min: constants::SPEED_SCALE_MIN,
            speed_scale_max: constants::SPEED_SCALE_MAX,
            upward_kick: constants::UPWARD_KICK,
            lifetime_min: constants::LIFETIME_MIN,
            lifetime_max: constants::LIFETIME_MAX,
            size_min: constants::SIZE_MIN,
            size_max: constants::SIZE_MAX,
        }
    }
}

impl SpawnConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_particles == 0 || self.max_particles > constants::MAX_PARTICLES_LIMIT {
            return Err(ConfigError::invalid(
                "spawn.max_particles",
                format!("{} is outside [1, {}]", self.max_particles, constants::MAX_PARTICLES_LIMIT),
            ));
        }
        if self.lifetime_min == 0 || self.lifetime_min >= self.lifetime_max {
            return Err(ConfigError::invalid(
                "spawn.lifetime_min",
                format!("need 0 < {} < lifetime_max {}", self.lifetime_min, self.lifetime_max),
            ));
        }
        check_range("spawn.size_min", self.size_min, self.size_max)?;
        check_range("spawn.speed_scale_min", self.speed_scale_min, self.speed_scale_max)?;
        check_non_negative("spawn.threshold", self.threshold)?;
        check_non_negative("spawn.count_factor", self.count_factor)?;
        check_non_negative("spawn.jitter", self.jitter)?;
        check_non_negative("spawn.speed_factor", self.speed_factor)?;
        check_non_negative("spawn.max_base_speed", self.max_base_speed)?;
        check_non_negative("spawn.upward_kick", self.upward_kick)
    }
}

/// Per-tick motion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Downward acceleration in px/tick².
    pub gravity: f32,
    /// Velocity damping factor, in `(0, 1]`.
    pub friction: f32,
    /// Also damp the vertical component (off: gravity is undamped).
    pub damp_vertical: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            friction: constants::FRICTION,
            damp_vertical: false,
        }
    }
}

impl PhysicsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.friction.is_nan() || self.friction <= 0.0 || self.friction > 1.0 {
            return Err(ConfigError::invalid(
                "physics.friction",
                format!("{} is outside (0, 1]", self.friction),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::invalid("physics.gravity", "must be finite"));
        }
        Ok(())
    }
}

/// Proximity line parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkConfig {
    /// Pairs strictly closer than this (px) are linked.
    pub radius: f32,
    /// Alpha of a zero-length link between full-life particles.
    pub max_alpha: f32,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            radius: constants::LINK_RADIUS,
            max_alpha: constants::LINK_MAX_ALPHA,
            width: constants::LINK_WIDTH,
        }
    }
}

impl LinkConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_non_negative("links.radius", self.radius)?;
        check_unit("links.max_alpha", self.max_alpha)?;
        check_non_negative("links.width", self.width)
    }
}

/// Disc and halo appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlowConfig {
    /// Core disc alpha at full life.
    pub core_alpha: f32,
    /// Core disc blur radius.
    pub core_blur: f32,
    /// Halo disc alpha at full life.
    pub halo_alpha: f32,
    /// Halo disc blur radius.
    pub halo_blur: f32,
    /// Halo radius relative to the core.
    pub halo_scale: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            core_alpha: constants::CORE_ALPHA,
            core_blur: constants::CORE_BLUR,
            halo_alpha: constants::HALO_ALPHA,
            halo_blur: constants::HALO_BLUR,
            halo_scale: constants::HALO_SCALE,
        }
    }
}

impl GlowConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_unit("glow.core_alpha", self.core_alpha)?;
        check_unit("glow.halo_alpha", self.halo_alpha)?;
        check_non_negative("glow.core_blur", self.core_blur)?;
        check_non_negative("glow.halo_blur", self.halo_blur)?;
        check_non_negative("glow.halo_scale", self.halo_scale)
    }
}

/// How the overlay composites with the page underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Plain source-over.
    Normal,
    /// Screen blending; overlapping neon brightens.
    #[default]
    Screen,
    /// Additive blending.
    Additive,
}

/// Overlay surface properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Compositing mode.
    pub blend: BlendMode,
    /// Let pointer input fall through to the page underneath.
    pub pointer_passthrough: bool,
    /// Stacking layer above page content.
    pub layer: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            blend: BlendMode::Screen,
            pointer_passthrough: true,
            layer: constants::OVERLAY_LAYER,
        }
    }
}

fn check_non_negative(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be finite and >= 0")))
    }
}

fn check_unit(field: &'static str, value: f32) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is outside [0, 1]")))
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> ConfigResult<()> {
    check_non_negative(field, min)?;
    if min < max && max.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("empty range [{min}, {max})")))
    }
}
