//! Raster backend over embedded-graphics draw targets.
//!
//! Lines, circles, rectangles and text map onto embedded-graphics primitives.
//! Filled paths are flattened and scan-converted here, since embedded-graphics
//! has no general polygon fill. Translucent rectangles go through
//! [`BlendTarget::blend_rect`].
//!
//! Mono fonts cannot be outlined, so stroked text is rendered filled.

use core::cmp::Ordering;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Polyline, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use heapless::Vec;
#[allow(unused_imports)]
use micromath::F32Ext;

use super::{BlendTarget, Surface};
use crate::geometry::{CONTOUR_CAPACITY, Contour, FillRule, Path, Rect, Vec2};
use crate::paint::{Paint, PaintStyle, StrokeCap, TextAlign, TextStyle};

/// Maximum nesting of [`Surface::save`].
pub const CLIP_STACK_DEPTH: usize = 4;

/// Failure while rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsError<E> {
    /// The underlying draw target failed.
    Target(E),
    /// `save` nested deeper than [`CLIP_STACK_DEPTH`].
    ClipStackOverflow,
    /// `restore` without a matching `save`.
    ClipStackUnderflow,
}

impl<E: core::fmt::Debug> core::fmt::Display for GraphicsError<E> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Target(e) => write!(f, "draw target error: {e:?}"),
            Self::ClipStackOverflow => write!(f, "clip stack deeper than {CLIP_STACK_DEPTH}"),
            Self::ClipStackUnderflow => write!(f, "restore without save"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for GraphicsError<E> {}

/// [`Surface`] that rasterizes onto a [`BlendTarget`].
pub struct GraphicsSurface<'a, D> {
    target: &'a mut D,
    clip: Rectangle,
    saved: Vec<Rectangle, CLIP_STACK_DEPTH>,
}

impl<'a, D> GraphicsSurface<'a, D>
where
    D: BlendTarget,
{
    /// Wrap `target`; the initial clip is the whole target.
    pub fn new(target: &'a mut D) -> Self {
        let clip = target.bounding_box();
        Self {
            target,
            clip,
            saved: Vec::new(),
        }
    }

    /// Current clip in pixels.
    #[inline]
    pub const fn clip(&self) -> Rectangle { self.clip }

    fn stroke_contour(
        &mut self,
        points: &[Vec2],
        closed: bool,
        color: Rgb565,
        width: u32,
    ) -> Result<(), D::Error> {
        let mut vertices: Vec<Point, { CONTOUR_CAPACITY + 1 }> = points.iter().map(|p| p.to_point()).collect();
        if closed && let Some(&first) = vertices.first() {
            vertices.push(first).ok();
        }
        if vertices.len() < 2 {
            return Ok(());
        }
        Polyline::new(&vertices)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(&mut self.target.clipped(&self.clip))
    }

    /// Scanline fill sampling each row at its pixel centers.
    fn fill_contour(
        &mut self,
        points: &[Vec2],
        rule: FillRule,
        color: Rgb565,
    ) -> Result<(), D::Error> {
        if points.len() < 3 {
            return Ok(());
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let clip_bottom = self.clip.top_left.y + self.clip.size.height as i32;
        let y_start = (min_y.floor() as i32).max(self.clip.top_left.y);
        let y_end = (max_y.ceil() as i32).min(clip_bottom);

        // (x, winding direction) for each edge crossing the sample row
        let mut crossings: Vec<(f32, i32), CONTOUR_CAPACITY> = Vec::new();
        let mut target = self.target.clipped(&self.clip);

        for y in y_start..y_end {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    let dir = if b.y > a.y { 1 } else { -1 };
                    crossings.push((a.x + t * (b.x - a.x), dir)).ok();
                }
            }
            crossings.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

            let mut winding = 0;
            for (i, pair) in crossings.windows(2).enumerate() {
                winding += pair[0].1;
                let inside = match rule {
                    FillRule::NonZero => winding != 0,
                    FillRule::EvenOdd => i % 2 == 0,
                };
                if !inside {
                    continue;
                }
                // Pixel x is covered when its center x + 0.5 lies in [x0, x1)
                let x0 = (pair[0].0 - 0.5).ceil() as i32;
                let x1 = (pair[1].0 - 0.5).ceil() as i32;
                if x1 > x0 {
                    target.fill_solid(&Rectangle::new(Point::new(x0, y), Size::new((x1 - x0) as u32, 1)), color)?;
                }
            }
        }

        Ok(())
    }
}

/// Whole-pixel stroke width; zero-width strokes are hairlines.
fn stroke_px(width: f32) -> u32 { (width.round() as u32).max(1) }

impl<D> Surface for GraphicsSurface<'_, D>
where
    D: BlendTarget,
{
    type Error = GraphicsError<D::Error>;

    fn save(&mut self) -> Result<(), Self::Error> {
        self.saved.push(self.clip).map_err(|_| GraphicsError::ClipStackOverflow)
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        self.clip = self.saved.pop().ok_or(GraphicsError::ClipStackUnderflow)?;
        Ok(())
    }

    fn clip_rect(
        &mut self,
        rect: Rect,
    ) -> Result<(), Self::Error> {
        self.clip = self.clip.intersection(&rect.to_rectangle());
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        let (mut from, mut to) = (from, to);
        if paint.cap == StrokeCap::Square {
            let d = to - from;
            let len = d.length();
            if len > 0.0 {
                let ext = d * (paint.stroke_width / 2.0 / len);
                from = from - ext;
                to = to + ext;
            }
        }
        Line::new(from.to_point(), to.to_point())
            .into_styled(PrimitiveStyle::with_stroke(paint.color, stroke_px(paint.stroke_width)))
            .draw(&mut self.target.clipped(&self.clip))
            .map_err(GraphicsError::Target)
    }

    fn draw_path(
        &mut self,
        path: &Path,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        let contour: Contour = path.flatten();
        match paint.style {
            PaintStyle::Fill => {
                if let Some(shadow) = paint.shadow {
                    self.stroke_contour(&contour, true, shadow.color, stroke_px(shadow.radius * 2.0))
                        .map_err(GraphicsError::Target)?;
                }
                self.fill_contour(&contour, path.fill_rule(), paint.color)
                    .map_err(GraphicsError::Target)
            }
            PaintStyle::Stroke => self
                .stroke_contour(&contour, path.is_closed(), paint.color, stroke_px(paint.stroke_width))
                .map_err(GraphicsError::Target),
        }
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        let area = rect.to_rectangle();
        if paint.style == PaintStyle::Fill && !paint.is_opaque() {
            let area = area.intersection(&self.clip);
            return self
                .target
                .blend_rect(&area, paint.color, paint.alpha)
                .map_err(GraphicsError::Target);
        }

        let style = match paint.style {
            PaintStyle::Fill => PrimitiveStyle::with_fill(paint.color),
            PaintStyle::Stroke => PrimitiveStyle::with_stroke(paint.color, stroke_px(paint.stroke_width)),
        };
        area.into_styled(style)
            .draw(&mut self.target.clipped(&self.clip))
            .map_err(GraphicsError::Target)
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        if !(radius > 0.0) {
            return Ok(());
        }
        let style = match paint.style {
            PaintStyle::Fill => PrimitiveStyle::with_fill(paint.color),
            PaintStyle::Stroke => PrimitiveStyle::with_stroke(paint.color, stroke_px(paint.stroke_width)),
        };
        Circle::with_center(center.to_point(), (radius * 2.0).round() as u32)
            .into_styled(style)
            .draw(&mut self.target.clipped(&self.clip))
            .map_err(GraphicsError::Target)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Vec2,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let alignment = match style.align {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Alphabetic)
            .build();
        Text::with_text_style(text, origin.to_point(), style.character_style(), text_style)
            .draw(&mut self.target.clipped(&self.clip))
            .map(|_| ())
            .map_err(GraphicsError::Target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FrameBuffer;

    const W: u32 = 32;

    fn buffer() -> [Rgb565; (W * W) as usize] { [Rgb565::BLACK; (W * W) as usize] }

    fn count(
        fb: &FrameBuffer<'_>,
        color: Rgb565,
    ) -> usize {
        fb.pixels().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn test_fill_square_path_covers_exact_pixels() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        {
            let mut surface = GraphicsSurface::new(&mut fb);
            surface
                .draw_path(&Path::rect(4.0, 4.0, 14.0, 10.0), &Paint::fill(Rgb565::WHITE))
                .unwrap();
        }
        assert_eq!(count(&fb, Rgb565::WHITE), 60);
        assert_eq!(fb.pixel(Point::new(4, 4)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(13, 9)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(14, 9)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_even_odd_and_non_zero_agree_on_convex_outline() {
        let mut a = Path::rect(2.0, 2.0, 20.0, 12.0);
        let mut pixels_a = buffer();
        let mut fb_a = FrameBuffer::new(&mut pixels_a, W);
        GraphicsSurface::new(&mut fb_a)
            .draw_path(&a, &Paint::fill(Rgb565::WHITE))
            .unwrap();

        a.set_fill_rule(FillRule::EvenOdd);
        let mut pixels_b = buffer();
        let mut fb_b = FrameBuffer::new(&mut pixels_b, W);
        GraphicsSurface::new(&mut fb_b)
            .draw_path(&a, &Paint::fill(Rgb565::WHITE))
            .unwrap();

        assert_eq!(fb_a.pixels(), fb_b.pixels());
    }

    #[test]
    fn test_clip_limits_fill_and_restore_resets_it() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        {
            let mut surface = GraphicsSurface::new(&mut fb);
            surface.save().unwrap();
            surface.clip_rect(Rect::new(0.0, 0.0, 8.0, 8.0)).unwrap();
            surface
                .draw_rect(Rect::new(0.0, 0.0, 32.0, 32.0), &Paint::fill(Rgb565::RED))
                .unwrap();
            surface.restore().unwrap();
            assert_eq!(surface.clip().size, Size::new(W, W));
        }
        assert_eq!(count(&fb, Rgb565::RED), 64);
    }

    #[test]
    fn test_translucent_rect_blends() {
        let mut pixels = [Rgb565::WHITE; (W * W) as usize];
        let mut fb = FrameBuffer::new(&mut pixels, W);
        GraphicsSurface::new(&mut fb)
            .draw_rect(Rect::new(0.0, 0.0, 32.0, 32.0), &Paint::fill(Rgb565::BLACK).with_alpha(127))
            .unwrap();
        assert!(fb.pixels().iter().all(|&c| c == Rgb565::new(16, 32, 16)));
    }

    #[test]
    fn test_restore_without_save_fails() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        let mut surface = GraphicsSurface::new(&mut fb);
        assert_eq!(surface.restore(), Err(GraphicsError::ClipStackUnderflow));
    }

    #[test]
    fn test_save_depth_is_bounded() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        let mut surface = GraphicsSurface::new(&mut fb);
        for _ in 0..CLIP_STACK_DEPTH {
            surface.save().unwrap();
        }
        assert_eq!(surface.save(), Err(GraphicsError::ClipStackOverflow));
    }

    #[test]
    fn test_square_cap_extends_line() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        GraphicsSurface::new(&mut fb)
            .draw_line(
                Vec2::new(16.0, 10.0),
                Vec2::new(16.0, 20.0),
                &Paint::stroke(Rgb565::WHITE, 1.0).with_cap(StrokeCap::Square),
            )
            .unwrap();
        assert_eq!(fb.pixel(Point::new(16, 15)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixel(Point::new(16, 5)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_stroked_path_leaves_interior_empty() {
        let mut pixels = buffer();
        let mut fb = FrameBuffer::new(&mut pixels, W);
        GraphicsSurface::new(&mut fb)
            .draw_path(&Path::rect(4.0, 4.0, 24.0, 24.0), &Paint::stroke(Rgb565::GREEN, 1.0))
            .unwrap();
        assert_eq!(fb.pixel(Point::new(4, 4)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(14, 14)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_text_lands_near_origin() {
        let mut pixels = [Rgb565::BLACK; 64 * 32];
        let mut fb = FrameBuffer::new(&mut pixels, 64);
        GraphicsSurface::new(&mut fb)
            .draw_text("8", Vec2::new(32.0, 24.0), &TextStyle::new(crate::config::ROBOTO_CONDENSED))
            .unwrap();
        let lit: usize = fb.pixels().iter().filter(|&&c| c == Rgb565::WHITE).count();
        assert!(lit > 0);
        // nothing drawn far to the left of a centered single glyph
        for y in 0..32 {
            assert_eq!(fb.pixel(Point::new(10, y)), Some(Rgb565::BLACK));
        }
    }
}
