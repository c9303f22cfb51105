//! Watch-face lifecycle and the host loop that drives it.
//!
//! A [`WatchFace`] receives lifecycle events (attach, detach, time ticks,
//! active/ambient flips) and renders onto any [`Surface`]. The [`Watch`] host
//! buffers those events and hands them to the face at the start of a draw, so a
//! frame is always rendered from one consistent snapshot.

use embedded_graphics::prelude::Size;
use log::{debug, trace, warn};

use crate::surface::Surface;
use crate::time::TimeSample;

/// Analog watch face driven by a host.
pub trait WatchFace {
    /// Short name used for logging and face selection.
    fn name(&self) -> &'static str;

    /// Called once the display size is known. Recomputes geometry if the size changed.
    fn attach(
        &mut self,
        size: Size,
    );

    /// Called when the face is taken off screen.
    fn detach(&mut self);

    fn on_time_changed(
        &mut self,
        time: TimeSample,
    );

    /// Called on every interactive/ambient flip. Re-resolves the style set.
    fn on_active_state_changed(
        &mut self,
        active: bool,
    );

    /// Whether the face still wants per-second ticks while ambient.
    fn handle_seconds_in_dim_mode(&self) -> bool { false }

    /// Draw one frame from the current state.
    fn render<S: Surface>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error>;
}

/// Host driver that feeds ticks and state flips to a face.
///
/// Events arriving between frames are buffered. [`Watch::draw`] applies the
/// latest active flag first and then the latest time, and only then renders.
pub struct Watch<F> {
    face: F,

    /// Whether the face is attached to a display.
    attached: bool,

    /// Active flag last handed to the face.
    active: bool,

    /// Flip received since the last draw.
    pending_active: Option<bool>,

    /// Tick received since the last draw.
    pending_time: Option<TimeSample>,

    /// Most recent tick, applied or not.
    latest_time: Option<TimeSample>,

    /// Whether the next draw would change what is on screen.
    dirty: bool,
}

impl<F: WatchFace> Watch<F> {
    pub const fn new(face: F) -> Self {
        Self {
            face,
            attached: false,
            active: true,
            pending_active: None,
            pending_time: None,
            latest_time: None,
            dirty: false,
        }
    }

    /// Attach the face to a display of `size` in the given state.
    pub fn attach(
        &mut self,
        size: Size,
        active: bool,
    ) {
        debug!("{}: attach {}x{} active={active}", self.face.name(), size.width, size.height);
        self.face.attach(size);
        self.face.on_active_state_changed(active);
        self.active = active;
        self.pending_active = None;
        self.attached = true;
        self.dirty = true;
    }

    pub fn detach(&mut self) {
        debug!("{}: detach", self.face.name());
        self.face.detach();
        self.attached = false;
        self.pending_active = None;
        self.pending_time = None;
        self.dirty = false;
    }

    /// Active flag as it will be after the next draw.
    #[inline]
    pub fn is_active(&self) -> bool { self.pending_active.unwrap_or(self.active) }

    /// Whether a redraw is pending.
    #[inline]
    pub const fn is_dirty(&self) -> bool { self.dirty }

    #[inline]
    pub const fn face(&self) -> &F { &self.face }

    /// Buffer a time tick. Returns whether it needs a redraw.
    ///
    /// While ambient, a face that does not handle seconds is only invalidated
    /// when the minute (or anything coarser) changes. The tick is kept either
    /// way so the next frame shows the latest time.
    pub fn tick(
        &mut self,
        time: TimeSample,
    ) -> bool {
        if !self.attached {
            trace!("{}: tick while detached", self.face.name());
            return false;
        }

        let seconds_visible = self.is_active() || self.face.handle_seconds_in_dim_mode();
        let changed = match self.latest_time {
            None => true,
            Some(prev) if seconds_visible => prev != time,
            Some(prev) => !prev.same_minute(&time),
        };

        trace!(
            "{}: tick {:02}:{:02}:{:02} changed={changed}",
            self.face.name(),
            time.hour,
            time.minute,
            time.second
        );
        self.latest_time = Some(time);
        self.pending_time = Some(time);
        self.dirty |= changed;
        changed
    }

    /// Buffer an active/ambient flip. Returns whether the state changed.
    pub fn set_active(
        &mut self,
        active: bool,
    ) -> bool {
        if self.is_active() == active {
            return false;
        }
        debug!("{}: active -> {active}", self.face.name());
        self.pending_active = Some(active);
        if self.attached {
            self.dirty = true;
        }
        true
    }

    /// Apply buffered events and render a frame.
    ///
    /// Returns `true` when a frame was drawn. A surface error is logged and the
    /// frame skipped; the watch stays dirty so the next tick repaints.
    pub fn draw<S>(
        &mut self,
        surface: &mut S,
    ) -> bool
    where
        S: Surface,
        S::Error: core::fmt::Debug,
    {
        if !self.attached {
            return false;
        }

        if let Some(active) = self.pending_active.take() {
            self.active = active;
            self.face.on_active_state_changed(active);
        }
        if let Some(time) = self.pending_time.take() {
            self.face.on_time_changed(time);
        }

        match self.face.render(surface) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(e) => {
                warn!("{}: frame skipped: {e:?}", self.face.name());
                self.dirty = true;
                false
            }
        }
    }
}
