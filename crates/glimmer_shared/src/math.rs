//! Screen-space math shared by the engine and the painter.
//!
//! Units are pixels; the y axis points down, so positive `y` velocity
//! means "falling".

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - pointer samples, particle positions and velocities
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector pointing at `angle` radians, scaled by `length`.
    #[must_use]
    pub fn from_angle(angle: f32, length: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin) * length
    }


    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vec2::new(5.0, 8.0));
        assert_eq!(a.dot(b), 16.0); // 1*4 + 2*6
        assert_eq!(a.distance(b), 5.0); // 3-4-5 triangle
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_from_angle() {
        let v = Vec2::from_angle(std::f32::consts::FRAC_PI_2, 3.0);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 3.0).abs() < 1e-5);
        assert!((v.length() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_vec2_bytemuck() {
        let v = Vec2::new(1.0, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 8); // 2 * 4 bytes
    }
}
