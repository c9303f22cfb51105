//! Analog watch faces for round wrist displays.
//!
//! This crate contains the platform-agnostic parts shared between the desktop
//! simulator and any hardware target:
//!
//! - [`geometry`]: hand angles, tick marks, hand outlines and ring arcs
//! - [`colors`]: RGB565 color constants
//! - [`config`]: per-face dimensions, colors and typefaces
//! - [`paint`]: stroke/fill paints and text styles
//! - [`time`]: time samples and display state
//! - [`surface`]: the drawing surface contract plus recording and raster backends
//! - [`faces`]: the AeonNut and Nexus renderers
//! - [`face`]: lifecycle trait and the host driver that feeds ticks to a face
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. Per-frame work only uses fixed-capacity
//! `heapless` containers, so rendering never touches the heap.
//!
//! # Testing
//!
//! ```bash
//! cargo test -p watchfaces-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod face;
pub mod faces;
pub mod geometry;
pub mod paint;
pub mod surface;
pub mod time;

// Re-export commonly used items
pub use face::{Watch, WatchFace};
pub use faces::{AeonNut, AnyFace, FaceKind, Nexus};
pub use time::{DisplayState, TimeSample};
