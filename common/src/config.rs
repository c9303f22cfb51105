//! Static watch-face configuration.
//!
//! Each face reads a flat set of named dimensions, colors and typefaces. The
//! `DEFAULT` values are tuned for a 320x320 round panel. A host with a
//! different panel builds its own value with struct update syntax:
//!
//! ```ignore
//! let config = AeonNutConfig { tick_length: 18.0, ..AeonNutConfig::DEFAULT };
//! ```
//!
//! Nothing here changes after a face is constructed.

use embedded_graphics::pixelcolor::Rgb565;
use profont::{PROFONT_14_POINT, PROFONT_18_POINT};

use crate::colors::{
    BLACK,
    LIGHT_GRAY,
    NEXUS_BLUE,
    NEXUS_GREEN,
    NEXUS_HAND_SHADOW,
    NEXUS_RED,
    NEXUS_YELLOW,
    WHITE,
};
use crate::paint::Typeface;

// =============================================================================
// Display Configuration
// =============================================================================

/// Reference panel width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Reference panel height in pixels. Faces assume a square panel.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Ambient Mode
// =============================================================================

/// Fraction of light the ambient-mode scrim lets through.
pub const INACTIVE_BRIGHTNESS: f32 = 0.5;

/// Alpha of the ambient-mode scrim: `(1 - INACTIVE_BRIGHTNESS) * 255`, truncated.
pub const fn inactive_overlay_alpha() -> u8 { ((1.0 - INACTIVE_BRIGHTNESS) * 255.0) as u8 }

// =============================================================================
// Typefaces
// =============================================================================

/// Light display face used for the AeonNut logo.
pub const STEINER_LIGHT: Typeface = Typeface {
    name: "fonts/Steiner-Light.otf",
    font: &PROFONT_14_POINT,
};

/// Condensed face used for the AeonNut date.
pub const ROBOTO_CONDENSED: Typeface = Typeface {
    name: "fonts/RobotoCondensed-Regular.ttf",
    font: &PROFONT_18_POINT,
};

// =============================================================================
// AeonNut
// =============================================================================

/// Hour hand length as a fraction of the dial radius.
///
/// f64: the tip offset `(1 - ratio) * cy` must truncate to 64 at 320 px.
pub const HOUR_HAND_LENGTH_RATIO: f64 = 0.6;

/// Knob radius as a multiple of the tick width.
pub const KNOB_RADIUS_FACTOR: f32 = 2.5;

/// Hand base half-width as a multiple of the tick width.
pub const HAND_BASE_FACTOR: f32 = 2.0;

/// Half-width of the flat hand tip.
pub const HAND_TIP_HALF_WIDTH: f32 = 1.0;

/// Half-width of the second hand bar.
pub const SECOND_HAND_HALF_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeonNutConfig {
    pub tick_width: f32,
    pub tick_length: f32,
    pub tick_margin: f32,
    pub logo_margin_top: f32,
    pub date_box_size: f32,
    pub date_margin_bottom: f32,
    pub logo_text: &'static str,
    pub logo_typeface: Typeface,
    pub date_typeface: Typeface,
    pub tick_color: Rgb565,
    pub text_color: Rgb565,
    pub hand_color: Rgb565,
    pub second_hand_color: Rgb565,
    pub overlay_color: Rgb565,
}

impl AeonNutConfig {
    pub const DEFAULT: Self = Self {
        tick_width: 4.0,
        tick_length: 24.0,
        tick_margin: 8.0,
        logo_margin_top: 16.0,
        date_box_size: 40.0,
        date_margin_bottom: 20.0,
        logo_text: "android",
        logo_typeface: STEINER_LIGHT,
        date_typeface: ROBOTO_CONDENSED,
        tick_color: WHITE,
        text_color: WHITE,
        hand_color: WHITE,
        second_hand_color: LIGHT_GRAY,
        overlay_color: BLACK,
    };
}

impl Default for AeonNutConfig {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Nexus
// =============================================================================

/// Minute hand tip margin from the top edge, in ring thicknesses.
pub const MINUTE_HAND_EDGE_RINGS: f32 = 4.0;

/// Hour hand tip margin from the top edge, in ring thicknesses.
pub const HOUR_HAND_EDGE_RINGS: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NexusConfig {
    pub ring_thickness: f32,
    pub ring_outer_margin: f32,
    pub hand_radius_center: f32,
    pub hand_radius_top: f32,
    pub hand_shadow_radius: f32,
    /// Clockwise from the top-left quadrant.
    pub ring_colors: [Rgb565; 4],
    pub hand_color: Rgb565,
    pub hand_shadow_color: Rgb565,
}

impl NexusConfig {
    pub const DEFAULT: Self = Self {
        ring_thickness: 10.0,
        ring_outer_margin: 4.0,
        hand_radius_center: 10.0,
        hand_radius_top: 5.0,
        hand_shadow_radius: 4.0,
        ring_colors: [NEXUS_BLUE, NEXUS_RED, NEXUS_GREEN, NEXUS_YELLOW],
        hand_color: WHITE,
        hand_shadow_color: NEXUS_HAND_SHADOW,
    };
}

impl Default for NexusConfig {
    fn default() -> Self { Self::DEFAULT }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_alpha_is_literal_formula() {
        assert_eq!(inactive_overlay_alpha(), 127);
    }

    #[test]
    fn test_reference_panel_is_square() {
        assert_eq!(SCREEN_WIDTH, SCREEN_HEIGHT);
    }

    #[test]
    fn test_aeon_nut_ticks_fit_inside_dial() {
        let c = AeonNutConfig::DEFAULT;
        assert!(c.tick_margin + c.tick_length < SCREEN_HEIGHT as f32 / 2.0);
    }

    #[test]
    fn test_nexus_hands_are_nested() {
        // The hour hand tip stays further from the edge than the minute hand tip
        assert!(HOUR_HAND_EDGE_RINGS > MINUTE_HAND_EDGE_RINGS);
        let c = NexusConfig::DEFAULT;
        assert!(c.hand_radius_top < c.hand_radius_center);
    }
}
