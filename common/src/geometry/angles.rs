//! Hand angles and point rotation.

use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use super::Vec2;

/// Degrees per hour step on a 12-hour dial.
const DEGREES_PER_HOUR: f32 = 30.0;

/// Extra hour-hand travel per elapsed minute.
const HOUR_DEGREES_PER_MINUTE: f32 = 0.5;

/// Degrees per minute (or second) step on a 60-step dial.
const DEGREES_PER_STEP: f32 = 6.0;

/// Map any finite angle into [0, 360). Non-finite input maps to 0.
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Hour hand angle: `30 * (hour % 12) + 0.5 * minute`.
///
/// Always in [0, 360) for `hour` in 0..=23 and `minute` in 0..=59.
#[inline]
pub fn hour_angle_degrees(
    hour: u8,
    minute: u8,
) -> f32 {
    normalize_degrees(DEGREES_PER_HOUR * f32::from(hour % 12) + HOUR_DEGREES_PER_MINUTE * f32::from(minute))
}

/// Minute hand angle: `6 * minute`.
#[inline]
pub fn minute_angle_degrees(minute: u8) -> f32 { normalize_degrees(DEGREES_PER_STEP * f32::from(minute)) }

/// Second hand angle: `6 * second`.
#[inline]
pub fn second_angle_degrees(second: u8) -> f32 { normalize_degrees(DEGREES_PER_STEP * f32::from(second)) }

/// Rotate `p` clockwise (on screen) by `degrees` about `center`.
///
/// Whole quarter turns are exact; other angles go through sin/cos.
pub fn rotate_point(
    p: Vec2,
    center: Vec2,
    degrees: f32,
) -> Vec2 {
    let degrees = normalize_degrees(degrees);
    if degrees % 90.0 == 0.0 {
        return quarter_turn(p, (degrees / 90.0) as u8, center);
    }

    let radians = degrees * (PI / 180.0);
    let (sin, cos) = (radians.sin(), radians.cos());
    let d = p - center;
    Vec2::new(center.x + d.x * cos - d.y * sin, center.y + d.x * sin + d.y * cos)
}

/// Exact clockwise rotation by `turns` quarter turns about `center`.
pub(super) fn quarter_turn(
    p: Vec2,
    turns: u8,
    center: Vec2,
) -> Vec2 {
    let d = p - center;
    match turns % 4 {
        0 => p,
        1 => Vec2::new(center.x - d.y, center.y + d.x),
        2 => Vec2::new(center.x - d.x, center.y - d.y),
        _ => Vec2::new(center.x + d.y, center.y - d.x),
    }
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
    fn test_hour_angle_formula_full_domain() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let expected = 30.0 * f32::from(hour % 12) + 0.5 * f32::from(minute);
                let angle = hour_angle_degrees(hour, minute);
                assert_eq!(angle, expected, "{hour}:{minute}");
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_minute_and_second_angles_are_exact() {
        for v in 0..60u8 {
            assert_eq!(minute_angle_degrees(v), 6.0 * f32::from(v));
            assert_eq!(second_angle_degrees(v), 6.0 * f32::from(v));
        }
    }

    #[test]
    fn test_angles_at_quarter_past_three() {
        assert_eq!(hour_angle_degrees(3, 15), 97.5);
        assert_eq!(hour_angle_degrees(15, 15), 97.5);
        assert_eq!(minute_angle_degrees(15), 90.0);
        assert_eq!(second_angle_degrees(45), 270.0);
    }

    #[test]
    fn test_out_of_range_input_still_wraps() {
        assert_eq!(minute_angle_degrees(60), 0.0);
        assert_eq!(second_angle_degrees(75), 90.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(450.0), 90.0);
        assert_eq!(normalize_degrees(f32::NAN), 0.0);
    }

    #[test]
    fn test_rotate_point_clockwise() {
        let c = Vec2::new(160.0, 160.0);
        let twelve = Vec2::new(160.0, 0.0);
        assert_eq!(rotate_point(twelve, c, 90.0), Vec2::new(320.0, 160.0));
        assert_eq!(rotate_point(twelve, c, 180.0), Vec2::new(160.0, 320.0));
        assert_eq!(rotate_point(twelve, c, 270.0), Vec2::new(0.0, 160.0));
        assert_eq!(rotate_point(twelve, c, 360.0), twelve);
    }

    #[test]
    fn test_rotate_point_arbitrary_angle() {
        let c = Vec2::new(0.0, 0.0);
        let p = rotate_point(Vec2::new(0.0, -10.0), c, 30.0);
        assert_close(p, Vec2::new(5.0, -8.660_254));
    }

    #[test]
    fn test_rotate_point_preserves_distance() {
        let c = Vec2::new(160.0, 160.0);
        let p = Vec2::new(170.0, 40.0);
        for step in 0..36 {
            let r = rotate_point(p, c, step as f32 * 10.0 + 3.0);
            assert!(((r - c).length() - (p - c).length()).abs() < 1e-2);
        }
    }
}
