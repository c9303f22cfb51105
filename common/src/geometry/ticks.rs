//! Radial hour tick marks.

use heapless::Vec;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::{Vec2, rotate_point};

/// Upper bound on ticks per dial (one per minute).
pub const MAX_TICKS: usize = 60;

/// Minor ticks start this many margins away from the rim. Negative values push the
/// start beyond the rim, so only the inner end of a minor tick stays on screen and
/// the major ticks read as longer.
pub const MINOR_TICK_MARGIN_FACTOR: f32 = -3.0;

/// One radial tick segment, running from `start` (rim side) toward the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    /// Distance of `start` inside the rim. Negative values lie beyond the rim.
    pub inset: f32,
    pub major: bool,
}

pub type TickSet = Vec<TickMark, MAX_TICKS>;

/// Compute `count` evenly spaced ticks starting at 12 o'clock.
///
/// Every `major_every_n`-th tick (counting from 0) is major: it uses `major_width`
/// and starts `margin` inside the rim. Minor ticks use `minor_width` and start at
/// `MINOR_TICK_MARGIN_FACTOR * margin`. Insets are truncated to whole pixels. Each
/// tick runs `length` toward the center from its start.
///
/// A non-positive `radius` or zero `count` yields no ticks.
#[allow(clippy::too_many_arguments)]
pub fn tick_set(
    center: Vec2,
    radius: f32,
    count: usize,
    major_every_n: usize,
    minor_width: f32,
    major_width: f32,
    length: f32,
    margin: f32,
) -> TickSet {
    let mut ticks = TickSet::new();
    if count == 0 || !(radius > 0.0) {
        return ticks;
    }

    let step = 360.0 / count as f32;
    for i in 0..count.min(MAX_TICKS) {
        let major = major_every_n != 0 && i % major_every_n == 0;
        let inset = (if major { margin } else { MINOR_TICK_MARGIN_FACTOR * margin }).trunc();
        let width = if major { major_width } else { minor_width };

        let rim_y = center.y - radius;
        let start = Vec2::new(center.x, rim_y + inset);
        let end = Vec2::new(center.x, rim_y + inset + length);
        let degrees = step * i as f32;

        ticks
            .push(TickMark {
                start: rotate_point(start, center, degrees),
                end: rotate_point(end, center, degrees),
                width,
                inset,
                major,
            })
            .ok();
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Vec2 = Vec2::new(160.0, 160.0);

    fn dial() -> TickSet { tick_set(CENTER, 160.0, 12, 3, 4.0, 8.0, 24.0, 8.0) }

    #[test]
    fn test_twelve_ticks_with_majors_every_third() {
        let ticks = dial();
        assert_eq!(ticks.len(), 12);
        for (i, tick) in ticks.iter().enumerate() {
            let major = i % 3 == 0;
            assert_eq!(tick.major, major, "tick {i}");
            assert_eq!(tick.width, if major { 8.0 } else { 4.0 }, "tick {i}");
            assert_eq!(tick.inset, if major { 8.0 } else { -24.0 }, "tick {i}");
        }
    }

    #[test]
    fn test_major_ticks_start_further_from_rim() {
        let ticks = dial();
        let major = ticks[0];
        let minor = ticks[1];
        assert!(major.inset > minor.inset);
        // Distance of the rim-side end from center
        assert!((major.start - CENTER).length() < (minor.start - CENTER).length());
    }

    #[test]
    fn test_cardinal_positions() {
        let ticks = dial();
        assert_eq!(ticks[0].start, Vec2::new(160.0, 8.0));
        assert_eq!(ticks[0].end, Vec2::new(160.0, 32.0));
        assert_eq!(ticks[3].start, Vec2::new(312.0, 160.0));
        assert_eq!(ticks[6].start, Vec2::new(160.0, 312.0));
        assert_eq!(ticks[9].start, Vec2::new(8.0, 160.0));
    }

    #[test]
    fn test_ticks_have_requested_length() {
        for tick in &dial() {
            assert!(((tick.end - tick.start).length() - 24.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_margin_is_truncated() {
        let ticks = tick_set(CENTER, 160.0, 12, 3, 4.0, 8.0, 24.0, 7.6);
        assert_eq!(ticks[0].inset, 7.0);
        assert_eq!(ticks[1].inset, -22.0);
    }

    #[test]
    fn test_degenerate_dial_is_empty() {
        assert!(tick_set(CENTER, 0.0, 12, 3, 4.0, 8.0, 24.0, 8.0).is_empty());
        assert!(tick_set(CENTER, 160.0, 0, 3, 4.0, 8.0, 24.0, 8.0).is_empty());
    }

    #[test]
    fn test_zero_major_interval_makes_all_minor() {
        let ticks = tick_set(CENTER, 160.0, 12, 0, 4.0, 8.0, 24.0, 8.0);
        assert!(ticks.iter().all(|t| !t.major));
    }
}
