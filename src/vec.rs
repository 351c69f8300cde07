//! 2D vector type for screen-space physics.

use crate::float::Float;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// 2D vector in screen space: x grows to the right, y grows downwards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self).scale(t)
    }

    /// Midpoint between self and other.
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, F::half())
    }

    /// Angle of this vector measured from the +x axis, in radians.
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Unit vector at `radians` from the +x axis, scaled by `length`.
    pub fn from_angle(radians: F, length: F) -> Self {
        Vec2 { x: radians.cos() * length, y: radians.sin() * length }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn midpoint_between_points() {
        let mid = Vec2::new(0.0f32, 0.0).midpoint(Vec2::new(10.0, 4.0));
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn angle_round_trips_through_from_angle() {
        let v = Vec2::new(-2.0f64, 2.0);
        let back = Vec2::from_angle(v.angle(), v.length());
        assert!((back.x - v.x).abs() < 1e-9);
        assert!((back.y - v.y).abs() < 1e-9);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec2::new(1.0f32, 1.0);
        v += Vec2::new(2.0, -3.0);
        v -= Vec2::new(1.0, 0.0);
        assert_eq!(v, Vec2::new(2.0, -2.0));
    }
}
