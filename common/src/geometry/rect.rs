use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::Vec2;
use super::angles::quarter_turn;

/// Axis-aligned rectangle in screen pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build from left/top/right/bottom edges.
    #[inline]
    pub const fn from_edges(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Rectangle covering a whole surface of the given size.
    #[inline]
    pub fn from_size(size: Size) -> Self { Self::new(0.0, 0.0, size.width as f32, size.height as f32) }

    #[inline]
    pub fn min(self) -> Vec2 { self.origin }

    #[inline]
    pub fn max(self) -> Vec2 { Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y) }

    #[inline]
    pub fn center(self) -> Vec2 { self.origin + self.size / 2.0 }

    #[inline]
    pub fn width(self) -> f32 { self.size.x }

    #[inline]
    pub fn height(self) -> f32 { self.size.y }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Rotate by a whole number of clockwise quarter turns about `center`.
    ///
    /// Quarter turns map axis-aligned rectangles onto axis-aligned rectangles, and
    /// are computed without trigonometry so the result is exact.
    pub fn rotated_quarter(
        self,
        turns: u8,
        center: Vec2,
    ) -> Rect {
        let a = quarter_turn(self.min(), turns, center);
        let b = quarter_turn(self.max(), turns, center);
        Rect::from_edges(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Pixel rectangle with edges rounded to the nearest pixel boundary.
    ///
    /// Empty or inverted rectangles map to a zero-sized rectangle.
    pub fn to_rectangle(self) -> Rectangle {
        let r = self.normalized();
        let x0 = r.origin.x.round() as i32;
        let y0 = r.origin.y.round() as i32;
        let x1 = (r.origin.x + r.size.x).round() as i32;
        let y1 = (r.origin.y + r.size.y).round() as i32;
        Rectangle::new(Point::new(x0, y0), Size::new((x1 - x0).max(0) as u32, (y1 - y0).max(0) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    ) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn test_normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    #[test]
    fn test_rotated_quarter_walks_quadrants_clockwise() {
        let center = Vec2::new(160.0, 160.0);
        let top_left = Rect::from_edges(0.0, 0.0, 155.0, 155.0);

        assert_eq!(top_left.rotated_quarter(0, center), top_left);
        assert_eq!(top_left.rotated_quarter(1, center), Rect::from_edges(165.0, 0.0, 320.0, 155.0));
        assert_eq!(top_left.rotated_quarter(2, center), Rect::from_edges(165.0, 165.0, 320.0, 320.0));
        assert_eq!(top_left.rotated_quarter(3, center), Rect::from_edges(0.0, 165.0, 155.0, 320.0));
        assert_eq!(top_left.rotated_quarter(4, center), top_left);
    }

    #[test]
    fn test_to_rectangle_rounds_edges() {
        let px = Rect::from_edges(0.4, 1.6, 10.6, 20.2).to_rectangle();
        assert_eq!(px.top_left, Point::new(0, 2));
        assert_eq!(px.size, Size::new(11, 18));
    }

    #[test]
    fn test_to_rectangle_empty() {
        let px = Rect::new(5.0, 5.0, 0.0, 3.0).to_rectangle();
        assert_eq!(px.size.width, 0);
    }
}
