//! Vector paths built from lines, cubic Béziers and circular arcs.

use core::f32::consts::PI;

use heapless::Vec;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::{Vec2, normalize_degrees, rotate_point};

/// Maximum number of verbs in a path. The largest outline (a rounded hand) uses 7.
pub const PATH_CAPACITY: usize = 12;

/// Maximum number of points in a flattened contour.
pub const CONTOUR_CAPACITY: usize = 128;

/// Line segments used to approximate one cubic Bézier.
const CUBIC_SEGMENTS: usize = 8;

/// Arc flattening step in degrees.
const ARC_STEP_DEGREES: f32 = 3.0;

/// Flattened polygon outline.
pub type Contour = Vec<Vec2, CONTOUR_CAPACITY>;

/// Rule deciding which regions of a self-intersecting outline are inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// One path instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Cubic Bézier: two control points, then the end point.
    CubicTo(Vec2, Vec2, Vec2),
    /// Circular arc. 0° points at 3 o'clock and positive sweeps run clockwise.
    Arc {
        center: Vec2,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    },
    Close,
}

/// A single-contour path with a fill rule.
///
/// Paths are plain values: rotating one returns a new path and never touches
/// shared state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    verbs: Vec<PathVerb, PATH_CAPACITY>,
    fill_rule: FillRule,
}

impl Path {
    /// Create an empty path with the non-zero fill rule.
    pub const fn new() -> Self {
        Self {
            verbs: Vec::new(),
            fill_rule: FillRule::NonZero,
        }
    }

    /// Closed axis-aligned rectangle outline, clockwise from the top-left corner.
    pub fn rect(
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    ) -> Self {
        if right <= left || bottom <= top {
            return Self::new();
        }
        let mut path = Self::new();
        path.move_to(Vec2::new(left, top));
        path.line_to(Vec2::new(right, top));
        path.line_to(Vec2::new(right, bottom));
        path.line_to(Vec2::new(left, bottom));
        path.close();
        path
    }

    pub fn set_fill_rule(
        &mut self,
        rule: FillRule,
    ) {
        self.fill_rule = rule;
    }

    #[inline]
    pub const fn fill_rule(&self) -> FillRule { self.fill_rule }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] { &self.verbs }

    #[inline]
    pub fn is_empty(&self) -> bool { self.verbs.is_empty() }

    /// Whether the contour ends with an explicit close.
    #[inline]
    pub fn is_closed(&self) -> bool { matches!(self.verbs.last(), Some(PathVerb::Close)) }

    pub fn move_to(
        &mut self,
        p: Vec2,
    ) {
        self.push(PathVerb::MoveTo(p));
    }

    pub fn line_to(
        &mut self,
        p: Vec2,
    ) {
        self.push(PathVerb::LineTo(p));
    }

    pub fn cubic_to(
        &mut self,
        c1: Vec2,
        c2: Vec2,
        end: Vec2,
    ) {
        self.push(PathVerb::CubicTo(c1, c2, end));
    }

    pub fn arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
    ) {
        self.push(PathVerb::Arc {
            center,
            radius,
            start_degrees,
            sweep_degrees,
        });
    }

    pub fn close(&mut self) { self.push(PathVerb::Close); }

    fn push(
        &mut self,
        verb: PathVerb,
    ) {
        // Outlines are built from fixed recipes that fit the capacity
        debug_assert!(!self.verbs.is_full(), "path capacity exceeded");
        self.verbs.push(verb).ok();
    }

    /// Copy of this path rotated clockwise by `degrees` about `center`.
    pub fn rotated(
        &self,
        degrees: f32,
        center: Vec2,
    ) -> Path {
        let rot = |p: Vec2| rotate_point(p, center, degrees);
        let mut out = Path {
            verbs: Vec::new(),
            fill_rule: self.fill_rule,
        };
        for verb in &self.verbs {
            let moved = match *verb {
                PathVerb::MoveTo(p) => PathVerb::MoveTo(rot(p)),
                PathVerb::LineTo(p) => PathVerb::LineTo(rot(p)),
                PathVerb::CubicTo(c1, c2, end) => PathVerb::CubicTo(rot(c1), rot(c2), rot(end)),
                PathVerb::Arc {
                    center: arc_center,
                    radius,
                    start_degrees,
                    sweep_degrees,
                } => PathVerb::Arc {
                    center: rot(arc_center),
                    radius,
                    start_degrees: normalize_degrees(start_degrees + degrees),
                    sweep_degrees,
                },
                PathVerb::Close => PathVerb::Close,
            };
            out.verbs.push(moved).ok();
        }
        out
    }

    /// Approximate the path by a polygon.
    ///
    /// Curves are subdivided into straight segments. A closing verb does not repeat
    /// the first point; consumers treat the contour as implicitly closed when filling.
    pub fn flatten(&self) -> Contour {
        let mut points = Contour::new();
        let mut current = Vec2::zero();

        for verb in &self.verbs {
            match *verb {
                PathVerb::MoveTo(p) | PathVerb::LineTo(p) => {
                    points.push(p).ok();
                    current = p;
                }
                PathVerb::CubicTo(c1, c2, end) => {
                    for i in 1..=CUBIC_SEGMENTS {
                        let t = i as f32 / CUBIC_SEGMENTS as f32;
                        points.push(cubic_point(current, c1, c2, end, t)).ok();
                    }
                    current = end;
                }
                PathVerb::Arc {
                    center,
                    radius,
                    start_degrees,
                    sweep_degrees,
                } => {
                    if radius <= 0.0 {
                        continue;
                    }
                    let steps = ((sweep_degrees.abs() / ARC_STEP_DEGREES).ceil() as usize).max(1);
                    for i in 0..=steps {
                        let degrees = start_degrees + sweep_degrees * (i as f32 / steps as f32);
                        let p = arc_point(center, radius, degrees);
                        points.push(p).ok();
                        current = p;
                    }
                }
                PathVerb::Close => {}
            }
        }

        points
    }
}

/// Point on a circle; 0° at 3 o'clock, clockwise on screen.
fn arc_point(
    center: Vec2,
    radius: f32,
    degrees: f32,
) -> Vec2 {
    let radians = degrees * (PI / 180.0);
    Vec2::new(center.x + radius * radians.cos(), center.y + radius * radians.sin())
}

fn cubic_point(
    p0: Vec2,
    c1: Vec2,
    c2: Vec2,
    p1: Vec2,
    t: f32,
) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(
        a: Vec2,
        b: Vec2,
    ) {
        assert!((a - b).length() < 1e-3, "{a:?} != {b:?}");
    }

    #[test]
    fn test_rect_outline() {
        let path = Path::rect(0.0, 0.0, 4.0, 2.0);
        assert!(path.is_closed());
        let pts = path.flatten();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[2], Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_inverted_rect_is_empty() {
        assert!(Path::rect(4.0, 0.0, 0.0, 2.0).is_empty());
    }

    #[test]
    fn test_cubic_flatten_hits_endpoints() {
        let mut path = Path::new();
        path.move_to(Vec2::new(0.0, 0.0));
        path.cubic_to(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0), Vec2::new(10.0, 0.0));
        let pts = path.flatten();
        assert_eq!(pts.len(), 1 + CUBIC_SEGMENTS);
        assert_close(*pts.last().unwrap(), Vec2::new(10.0, 0.0));
        // Midpoint of this symmetric curve is at 3/4 of the control height
        assert_close(pts[CUBIC_SEGMENTS / 2], Vec2::new(5.0, 7.5));
    }

    #[test]
    fn test_arc_flatten_stays_on_circle() {
        let mut path = Path::new();
        let c = Vec2::new(50.0, 50.0);
        path.arc(c, 20.0, 180.0, 90.0);
        let pts = path.flatten();
        assert_close(pts[0], Vec2::new(30.0, 50.0));
        assert_close(*pts.last().unwrap(), Vec2::new(50.0, 30.0));
        for p in &pts {
            assert!(((*p - c).length() - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rotated_keeps_fill_rule_and_moves_points() {
        let mut path = Path::rect(150.0, 0.0, 170.0, 10.0);
        path.set_fill_rule(FillRule::EvenOdd);
        let rotated = path.rotated(180.0, Vec2::new(160.0, 160.0));
        assert_eq!(rotated.fill_rule(), FillRule::EvenOdd);
        assert_eq!(rotated.verbs()[0], PathVerb::MoveTo(Vec2::new(170.0, 320.0)));
        assert!(rotated.is_closed());
    }

    #[test]
    fn test_rotated_arc_advances_start_angle() {
        let mut path = Path::new();
        let c = Vec2::new(160.0, 160.0);
        path.arc(c, 100.0, 180.0, 90.0);
        let rotated = path.rotated(270.0, c);
        assert_eq!(
            rotated.verbs()[0],
            PathVerb::Arc {
                center: c,
                radius: 100.0,
                start_degrees: 90.0,
                sweep_degrees: 90.0,
            }
        );
    }

    #[test]
    fn test_rotation_by_zero_is_identity() {
        let path = Path::rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(path.rotated(0.0, Vec2::new(9.0, 9.0)), path);
    }
}
