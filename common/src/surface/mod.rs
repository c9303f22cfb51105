//! Drawing surface contract and its backends.
//!
//! Faces only talk to [`Surface`]. A backend decides what a draw call means:
//!
//! - [`RecordingSurface`]: appends [`DrawCmd`] values, used by tests to inspect
//!   the exact command sequence of a frame
//! - [`GraphicsSurface`]: rasterizes onto any embedded-graphics target that
//!   can blend ([`BlendTarget`])
//! - [`FrameBuffer`]: an RGB565 framebuffer over a borrowed pixel slice
//!
//! Geometry handed to a surface is already in screen space. The contract has no
//! rotation or transform stack; only the clip rectangle is saved and restored.

mod framebuffer;
mod graphics;
mod recorder;

pub use framebuffer::{BlendTarget, FrameBuffer, blend};
pub use graphics::{CLIP_STACK_DEPTH, GraphicsError, GraphicsSurface};
pub use recorder::{DrawCmd, RECORD_CAPACITY, RecordError, RecordingSurface, TEXT_CAPACITY};

use crate::geometry::{Path, Rect, Vec2};
use crate::paint::{Paint, TextStyle};

/// Capability interface for 2D drawing backends.
pub trait Surface {
    type Error;

    /// Push the current clip so a later [`restore`](Surface::restore) can bring it back.
    fn save(&mut self) -> Result<(), Self::Error>;

    /// Pop the clip pushed by the matching [`save`](Surface::save).
    fn restore(&mut self) -> Result<(), Self::Error>;

    /// Intersect the current clip with `rect`.
    fn clip_rect(
        &mut self,
        rect: Rect,
    ) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_path(
        &mut self,
        path: &Path,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_rect(
        &mut self,
        rect: Rect,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error>;

    /// Draw `text` with its baseline at `origin.y`, anchored per `style.align`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Vec2,
        style: &TextStyle,
    ) -> Result<(), Self::Error>;
}
