//! Angle and geometry kernel.
//!
//! Everything here is a pure function of its arguments. Angles are in degrees,
//! measured clockwise from 12 o'clock, on a screen whose y axis points down.
//!
//! Rotations are applied analytically to points and paths instead of through a
//! canvas transform stack, so every emitted primitive carries final coordinates.

mod angles;
mod arcs;
mod hands;
mod path;
mod rect;
mod ticks;
mod vec2;

pub use angles::{
    hour_angle_degrees,
    minute_angle_degrees,
    normalize_degrees,
    rotate_point,
    second_angle_degrees,
};
pub use arcs::{quadrant_clip, quarter_arc};
pub use hands::{HandShape, hand_outline};
pub use path::{CONTOUR_CAPACITY, Contour, FillRule, PATH_CAPACITY, Path, PathVerb};
pub use rect::Rect;
pub use ticks::{MAX_TICKS, MINOR_TICK_MARGIN_FACTOR, TickMark, TickSet, tick_set};
pub use vec2::Vec2;
