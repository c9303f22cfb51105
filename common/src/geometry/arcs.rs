//! Ring arcs and the per-quadrant clip rectangles that keep them apart.

use embedded_graphics::prelude::Size;

use super::{Path, Rect, Vec2};

/// Arc of the circle inscribed in `bounds`.
///
/// 0° points at 3 o'clock and positive sweeps run clockwise, so a start of 180°
/// with a 90° sweep covers the top-left quarter. Empty bounds give an empty path.
pub fn quarter_arc(
    bounds: Rect,
    start_degrees: f32,
    sweep_degrees: f32,
) -> Path {
    let bounds = bounds.normalized();
    let radius = bounds.width().min(bounds.height()) / 2.0;
    if !(radius > 0.0) {
        return Path::new();
    }

    let mut path = Path::new();
    path.arc(bounds.center(), radius, start_degrees, sweep_degrees);
    path
}

/// Clip rectangle for one screen quadrant, numbered clockwise from the top-left.
///
/// The quadrant is pulled back from the center lines by half the ring stroke, so
/// the anti-aliased ends of neighbouring arcs never overlap. Assumes a square
/// surface, as the quadrants are produced by quarter turns of the first one.
pub fn quadrant_clip(
    size: Size,
    quadrant: u8,
    stroke: f32,
) -> Rect {
    let center = Vec2::new(size.width as f32 / 2.0, size.height as f32 / 2.0);
    let top_left = Rect::from_edges(0.0, 0.0, center.x - stroke / 2.0, center.y - stroke / 2.0);
    top_left.rotated_quarter(quadrant, center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathVerb;

    #[test]
    fn test_quarter_arc_uses_inscribed_circle() {
        let path = quarter_arc(Rect::from_edges(14.0, 14.0, 306.0, 306.0), 180.0, 90.0);
        assert_eq!(
            path.verbs(),
            &[PathVerb::Arc {
                center: Vec2::new(160.0, 160.0),
                radius: 146.0,
                start_degrees: 180.0,
                sweep_degrees: 90.0,
            }]
        );
    }

    #[test]
    fn test_quarter_arc_empty_bounds() {
        assert!(quarter_arc(Rect::new(10.0, 10.0, 0.0, 0.0), 180.0, 90.0).is_empty());
    }

    #[test]
    fn test_quadrant_clips_leave_gap_of_one_stroke() {
        let size = Size::new(320, 320);
        assert_eq!(quadrant_clip(size, 0, 10.0), Rect::from_edges(0.0, 0.0, 155.0, 155.0));
        assert_eq!(quadrant_clip(size, 1, 10.0), Rect::from_edges(165.0, 0.0, 320.0, 155.0));
        assert_eq!(quadrant_clip(size, 2, 10.0), Rect::from_edges(165.0, 165.0, 320.0, 320.0));
        assert_eq!(quadrant_clip(size, 3, 10.0), Rect::from_edges(0.0, 165.0, 155.0, 320.0));
    }

    #[test]
    fn test_quadrant_clips_do_not_overlap() {
        let size = Size::new(320, 320);
        for a in 0..4u8 {
            for b in (a + 1)..4u8 {
                assert!(quadrant_clip(size, a, 10.0).intersect(quadrant_clip(size, b, 10.0)).is_none());
            }
        }
    }
}
