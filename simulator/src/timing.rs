//! Timing and output constants.
//!
//! These use `std::time::Duration`, which the `no_std` common crate cannot.

use std::time::Duration;

/// Target frame time (~20 FPS). The loop sleeps if a frame completes early.
#[cfg(feature = "window")]
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Scale factor of the SDL window and PNG snapshots.
pub const OUTPUT_SCALE: u32 = 2;
