//! Hand outlines, built pointing at 12 o'clock and rotated per frame.

use super::{FillRule, Path, Vec2};

/// Outline family for a clock hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandShape {
    /// Straight-edged kite: wide base at the pivot, narrow flat tip. Filled even-odd.
    Kite { tip_half_width: f32 },
    /// Rounded base and rounded tip joined by straight sides, drawn with cubic
    /// Béziers. `length` locates the center of the tip cap.
    Rounded { tip_radius: f32 },
}

/// Outline of a hand pivoting at `center` and pointing straight up.
///
/// `half_width` is the half-width of the base at the pivot. The tip lies at
/// `center.y - length`. A non-positive (or non-finite) `length` gives an empty path.
pub fn hand_outline(
    center: Vec2,
    half_width: f32,
    length: f32,
    shape: HandShape,
) -> Path {
    if !(length > 0.0) || !center.is_finite() {
        return Path::new();
    }

    let (cx, cy) = (center.x, center.y);
    let tip_y = cy - length;
    let mut path = Path::new();

    match shape {
        HandShape::Kite { tip_half_width } => {
            path.set_fill_rule(FillRule::EvenOdd);
            path.move_to(Vec2::new(cx - tip_half_width, tip_y));
            path.line_to(Vec2::new(cx + tip_half_width, tip_y));
            path.line_to(Vec2::new(cx + half_width, cy));
            path.line_to(Vec2::new(cx - half_width, cy));
            path.close();
        }
        HandShape::Rounded { tip_radius } => {
            let (rc, rt) = (half_width, tip_radius);
            path.move_to(Vec2::new(cx + rc, cy));
            // right of center, down and around to the bottom
            path.cubic_to(Vec2::new(cx + rc, cy + rc), Vec2::new(cx, cy + rc), Vec2::new(cx, cy + rc));
            // bottom, around and up to the left of center
            path.cubic_to(Vec2::new(cx - rc, cy + rc), Vec2::new(cx - rc, cy), Vec2::new(cx - rc, cy));
            path.line_to(Vec2::new(cx - rt, tip_y));
            // over the tip cap
            path.cubic_to(Vec2::new(cx - rt, tip_y - rt), Vec2::new(cx, tip_y - rt), Vec2::new(cx, tip_y - rt));
            path.cubic_to(Vec2::new(cx + rt, tip_y - rt), Vec2::new(cx + rt, tip_y), Vec2::new(cx + rt, tip_y));
            path.close();
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathVerb;

    const CENTER: Vec2 = Vec2::new(160.0, 160.0);

    fn y_range(path: &Path) -> (f32, f32) {
        path.flatten()
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)))
    }

    #[test]
    fn test_kite_corners() {
        let path = hand_outline(CENTER, 8.0, 160.0, HandShape::Kite { tip_half_width: 1.0 });
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
        assert_eq!(
            path.verbs(),
            &[
                PathVerb::MoveTo(Vec2::new(159.0, 0.0)),
                PathVerb::LineTo(Vec2::new(161.0, 0.0)),
                PathVerb::LineTo(Vec2::new(168.0, 160.0)),
                PathVerb::LineTo(Vec2::new(152.0, 160.0)),
                PathVerb::Close,
            ]
        );
    }

    #[test]
    fn test_rounded_hand_extent() {
        let path = hand_outline(CENTER, 10.0, 125.0, HandShape::Rounded { tip_radius: 5.0 });
        assert_eq!(path.fill_rule(), FillRule::NonZero);
        assert!(path.is_closed());
        let (top, bottom) = y_range(&path);
        // tip cap center at 35, cap top at 30; base curve reaches 10 below center
        assert!((top - 30.0).abs() < 1e-3);
        assert!((bottom - 170.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_positive_length_is_empty() {
        assert!(hand_outline(CENTER, 8.0, 0.0, HandShape::Kite { tip_half_width: 1.0 }).is_empty());
        assert!(hand_outline(CENTER, 8.0, -4.0, HandShape::Rounded { tip_radius: 5.0 }).is_empty());
        assert!(hand_outline(CENTER, 8.0, f32::NAN, HandShape::Rounded { tip_radius: 5.0 }).is_empty());
    }
}
