//! Headless surface that records draw calls.

use heapless::{String, Vec};

use super::Surface;
use crate::geometry::{Path, Rect, Vec2};
use crate::paint::{Paint, TextStyle};

/// Maximum number of commands recorded per frame.
pub const RECORD_CAPACITY: usize = 48;

/// Maximum length of a recorded string.
pub const TEXT_CAPACITY: usize = 16;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Clip(Rect),
    Line { from: Vec2, to: Vec2, paint: Paint },
    Path { path: Path, paint: Paint },
    Rect { rect: Rect, paint: Paint },
    Circle { center: Vec2, radius: f32, paint: Paint },
    Text { text: String<TEXT_CAPACITY>, origin: Vec2, style: TextStyle },
}

/// Why a call could not be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// More than [`RECORD_CAPACITY`] commands in one recording.
    Full,
    /// String longer than [`TEXT_CAPACITY`].
    TextTooLong,
}

impl core::fmt::Display for RecordError {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Full => write!(f, "draw command list is full ({RECORD_CAPACITY} commands)"),
            Self::TextTooLong => write!(f, "text longer than {TEXT_CAPACITY} bytes"),
        }
    }
}

impl core::error::Error for RecordError {}

/// Surface that stores every call as a [`DrawCmd`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCmd, RECORD_CAPACITY>,
}

impl RecordingSurface {
    pub const fn new() -> Self { Self { commands: Vec::new() } }

    /// Commands in the order they were issued.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] { &self.commands }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) { self.commands.clear(); }

    fn record(
        &mut self,
        cmd: DrawCmd,
    ) -> Result<(), RecordError> {
        self.commands.push(cmd).map_err(|_| RecordError::Full)
    }
}

impl Surface for RecordingSurface {
    type Error = RecordError;

    fn save(&mut self) -> Result<(), Self::Error> { self.record(DrawCmd::Save) }

    fn restore(&mut self) -> Result<(), Self::Error> { self.record(DrawCmd::Restore) }

    fn clip_rect(
        &mut self,
        rect: Rect,
    ) -> Result<(), Self::Error> {
        self.record(DrawCmd::Clip(rect))
    }

    fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCmd::Line { from, to, paint: *paint })
    }

    fn draw_path(
        &mut self,
        path: &Path,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCmd::Path {
            path: path.clone(),
            paint: *paint,
        })
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCmd::Rect { rect, paint: *paint })
    }

    fn draw_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        self.record(DrawCmd::Circle {
            center,
            radius,
            paint: *paint,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Vec2,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        let text = String::try_from(text).map_err(|_| RecordError::TextTooLong)?;
        self.record(DrawCmd::Text {
            text,
            origin,
            style: *style,
        })
    }
}
