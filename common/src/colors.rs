//! Color constants for the watch faces.
//!
//! All colors are RGB565, the native format of the small SPI panels used on
//! watches, so no conversion is needed when writing to a framebuffer.
//!
//! Custom colors are converted from 24-bit sRGB by dropping the low bits
//! (`r >> 3`, `g >> 2`, `b >> 3`).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background and the ambient-mode scrim.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Ticks, text and hands.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Light gray (#CCCCCC). AeonNut second hand.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(25, 51, 25);

/// Nexus ring blue (#4285F4).
pub const NEXUS_BLUE: Rgb565 = Rgb565::new(8, 33, 30);

/// Nexus ring red (#EA4335).
pub const NEXUS_RED: Rgb565 = Rgb565::new(29, 16, 6);

/// Nexus ring green (#34A853).
pub const NEXUS_GREEN: Rgb565 = Rgb565::new(6, 42, 10);

/// Nexus ring yellow (#FBBC05).
pub const NEXUS_YELLOW: Rgb565 = Rgb565::new(31, 47, 0);

/// Halo drawn around the Nexus hands (#212121).
pub const NEXUS_HAND_SHADOW: Rgb565 = Rgb565::new(4, 8, 4);
