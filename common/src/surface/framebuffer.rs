//! RGB565 framebuffer with read-back, for alpha compositing.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Draw target that can composite a translucent color over what it already holds.
pub trait BlendTarget: DrawTarget<Color = Rgb565> {
    /// Blend `color` over every pixel of `area` with the given alpha (255 = opaque).
    fn blend_rect(
        &mut self,
        area: &Rectangle,
        color: Rgb565,
        alpha: u8,
    ) -> Result<(), Self::Error>;
}

/// Source-over blend of `src` onto `dst` in RGB565 space.
#[inline]
pub fn blend(
    dst: Rgb565,
    src: Rgb565,
    alpha: u8,
) -> Rgb565 {
    let a = u16::from(alpha);
    let mix = |d: u8, s: u8| -> u8 { ((u16::from(s) * a + u16::from(d) * (255 - a) + 127) / 255) as u8 };
    Rgb565::new(mix(dst.r(), src.r()), mix(dst.g(), src.g()), mix(dst.b(), src.b()))
}

/// Row-major framebuffer over a caller-owned pixel slice.
///
/// The height is derived from the slice length, so any slice is accepted: a
/// short slice simply yields a shorter (possibly empty) buffer.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [Rgb565],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a framebuffer `width` pixels wide over `pixels`.
    pub fn new(
        pixels: &'a mut [Rgb565],
        width: u32,
    ) -> Self {
        let height = if width == 0 { 0 } else { (pixels.len() / width as usize) as u32 };
        Self { pixels, width, height }
    }

    /// Color at `p`, or `None` outside the buffer.
    pub fn pixel(
        &self,
        p: Point,
    ) -> Option<Rgb565> {
        self.index(p).map(|i| self.pixels[i])
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb565] { &self.pixels[..(self.width * self.height) as usize] }

    /// Fill the whole buffer with one color.
    pub fn clear_buffer(
        &mut self,
        color: Rgb565,
    ) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(
        &self,
        p: Point,
    ) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size { Size::new(self.width, self.height) }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size.width == 0 || drawable_area.size.height == 0 {
            return Ok(());
        }

        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;
        for y in drawable_area.rows() {
            let row_start = y as usize * self.width as usize + x_start;
            self.pixels[row_start..row_start + width].fill(color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

impl BlendTarget for FrameBuffer<'_> {
    fn blend_rect(
        &mut self,
        area: &Rectangle,
        color: Rgb565,
        alpha: u8,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size.width == 0 || drawable_area.size.height == 0 {
            return Ok(());
        }

        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;
        for y in drawable_area.rows() {
            let row_start = y as usize * self.width as usize + x_start;
            for px in &mut self.pixels[row_start..row_start + width] {
                *px = blend(*px, color, alpha);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_derived_from_slice() {
        let mut pixels = [Rgb565::BLACK; 30];
        assert_eq!(FrameBuffer::new(&mut pixels, 8).size(), Size::new(8, 3));
        assert_eq!(FrameBuffer::new(&mut pixels, 0).size(), Size::zero());
    }

    #[test]
    fn test_draw_iter_ignores_out_of_bounds() {
        let mut pixels = [Rgb565::BLACK; 16];
        let mut fb = FrameBuffer::new(&mut pixels, 4);
        fb.draw_iter([
            Pixel(Point::new(1, 1), Rgb565::WHITE),
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(4, 0), Rgb565::WHITE),
        ])
        .unwrap();
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::WHITE));
        assert_eq!(fb.pixels().iter().filter(|&&c| c == Rgb565::WHITE).count(), 1);
        assert_eq!(fb.pixel(Point::new(4, 0)), None);
    }

    #[test]
    fn test_fill_solid_clips_to_buffer() {
        let mut pixels = [Rgb565::BLACK; 16];
        let mut fb = FrameBuffer::new(&mut pixels, 4);
        fb.fill_solid(&Rectangle::new(Point::new(2, 2), Size::new(10, 10)), Rgb565::RED)
            .unwrap();
        assert_eq!(fb.pixels().iter().filter(|&&c| c == Rgb565::RED).count(), 4);
        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(1, 3)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_blend_half_black_over_white() {
        let dimmed = blend(Rgb565::WHITE, Rgb565::BLACK, 127);
        assert_eq!(dimmed, Rgb565::new(16, 32, 16));
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(Rgb565::WHITE, Rgb565::BLACK, 0), Rgb565::WHITE);
        assert_eq!(blend(Rgb565::WHITE, Rgb565::BLACK, 255), Rgb565::BLACK);
        assert_eq!(blend(Rgb565::BLACK, Rgb565::BLACK, 127), Rgb565::BLACK);
    }

    #[test]
    fn test_blend_rect_only_touches_area() {
        let mut pixels = [Rgb565::WHITE; 16];
        let mut fb = FrameBuffer::new(&mut pixels, 4);
        fb.blend_rect(&Rectangle::new(Point::zero(), Size::new(2, 4)), Rgb565::BLACK, 127)
            .unwrap();
        assert_eq!(fb.pixel(Point::new(0, 3)), Some(Rgb565::new(16, 32, 16)));
        assert_eq!(fb.pixel(Point::new(2, 0)), Some(Rgb565::WHITE));
    }
}
