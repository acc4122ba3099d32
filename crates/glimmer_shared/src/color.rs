//! RGBA colour with CSS-style hex parsing.
//!
//! Palette entries are written as `#rrggbb` (or `#rrggbbaa`) in config
//! files and carried as normalised floats everywhere else.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xRRGGBB` value with full alpha.
    #[must_use]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgba(
            channel(rgb >> 16),
            channel(rgb >> 8),
            channel(rgb),
            1.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for anything else.
    pub fn parse_hex(text: &str) -> Result<Self, ConfigError> {
        let digits = text.trim().trim_start_matches('#');
        let invalid = || ConfigError::InvalidColor(text.to_owned());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            6 => Ok(Self::from_rgb_u32(packed)),
            8 => Ok(Self::from_rgb_u32(packed >> 8).with_alpha(channel(packed))),
            _ => Err(invalid()),
        }
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_array().map(to_byte);
        if a == 0xFF {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn channel(bits: u32) -> f32 {
    f32::from(u8::try_from(bits & 0xFF).unwrap_or(u8::MAX)) / 255.0
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
