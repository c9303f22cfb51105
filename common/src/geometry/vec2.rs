use core::ops::{Add, Div, Mul, Sub};

use embedded_graphics::prelude::Point;
#[allow(unused_imports)]
use micromath::F32Ext;

/// 2D vector in screen pixels (y grows downward).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    #[inline]
    pub const fn zero() -> Self { Self { x: 0.0, y: 0.0 } }

    #[inline]
    pub fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }

    #[inline]
    pub fn length(self) -> f32 { (self.x * self.x + self.y * self.y).sqrt() }

    /// Nearest integer pixel coordinate.
    #[inline]
    pub fn to_point(self) -> Point { Point::new(self.x.round() as i32, self.y.round() as i32) }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(
        self,
        rhs: Vec2,
    ) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(
        self,
        rhs: Vec2,
    ) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(
        self,
        rhs: f32,
    ) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(
        self,
        rhs: f32,
    ) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}
