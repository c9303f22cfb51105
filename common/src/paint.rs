//! Paints and text styles.
//!
//! A [`Paint`] is an immutable value: faces resolve a complete set of paints
//! whenever the display state changes instead of mutating shared paint objects
//! between frames.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;

use crate::colors::WHITE;

/// Fill the interior or stroke the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Line end decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Ends exactly at the endpoints.
    Butt,
    /// Extends past each endpoint by half the stroke width.
    Square,
}

/// Soft halo drawn underneath a filled shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub radius: f32,
    pub color: Rgb565,
}

/// How a primitive is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb565,
    /// 255 is opaque.
    pub alpha: u8,
    pub style: PaintStyle,
    /// Zero means a one-pixel hairline.
    pub stroke_width: f32,
    pub cap: StrokeCap,
    pub shadow: Option<Shadow>,
}

impl Paint {
    /// Opaque fill.
    pub const fn fill(color: Rgb565) -> Self {
        Self {
            color,
            alpha: 255,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            cap: StrokeCap::Butt,
            shadow: None,
        }
    }

    /// Opaque stroke of the given width.
    pub const fn stroke(
        color: Rgb565,
        width: f32,
    ) -> Self {
        Self {
            color,
            alpha: 255,
            style: PaintStyle::Stroke,
            stroke_width: width,
            cap: StrokeCap::Butt,
            shadow: None,
        }
    }

    pub const fn with_alpha(
        mut self,
        alpha: u8,
    ) -> Self {
        self.alpha = alpha;
        self
    }

    pub const fn with_cap(
        mut self,
        cap: StrokeCap,
    ) -> Self {
        self.cap = cap;
        self
    }

    pub const fn with_stroke_width(
        mut self,
        width: f32,
    ) -> Self {
        self.stroke_width = width;
        self
    }

    pub const fn with_shadow(
        mut self,
        shadow: Shadow,
    ) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool { self.alpha == 255 }
}

/// A font asset paired with the bitmap font that stands in for it on device.
#[derive(Clone, Copy)]
pub struct Typeface {
    /// Asset name, kept for diagnostics.
    pub name: &'static str,
    pub font: &'static MonoFont<'static>,
}

impl core::fmt::Debug for Typeface {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Typeface").field("name", &self.name).finish_non_exhaustive()
    }
}

impl PartialEq for Typeface {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        let (a, b) = (self.font, other.font);
        self.name == other.name
            && a.character_size == b.character_size
            && a.character_spacing == b.character_spacing
            && a.baseline == b.baseline
    }
}

/// Horizontal anchoring of text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Measured text extent in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Advance width of the whole string.
    pub width: u32,
    /// Ascent: distance from the top of a capital glyph to the baseline.
    pub height: u32,
}

/// How a string is drawn. The origin's y coordinate is the text baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub typeface: Typeface,
    pub color: Rgb565,
    pub style: PaintStyle,
    pub align: TextAlign,
}

impl TextStyle {
    /// White, filled and centered.
    pub const fn new(typeface: Typeface) -> Self {
        Self {
            typeface,
            color: WHITE,
            style: PaintStyle::Fill,
            align: TextAlign::Center,
        }
    }

    pub const fn with_color(
        mut self,
        color: Rgb565,
    ) -> Self {
        self.color = color;
        self
    }

    pub const fn with_style(
        mut self,
        style: PaintStyle,
    ) -> Self {
        self.style = style;
        self
    }

    /// Character style for embedded-graphics text rendering.
    pub fn character_style(&self) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(self.typeface.font, self.color) }

    /// Measure `text` without drawing it.
    pub fn measure(
        &self,
        text: &str,
    ) -> TextMetrics {
        let metrics = self.character_style().measure_string(text, Point::zero(), Baseline::Alphabetic);
        TextMetrics {
            width: metrics.bounding_box.size.width,
            height: self.typeface.font.baseline,
        }
    }
}
