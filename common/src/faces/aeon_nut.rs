//! AeonNut: white ticks, a logo, a boxed date and three kite-shaped hands.
//!
//! In ambient mode the second hand is dropped and the whole dial is dimmed by
//! a translucent black overlay painted last.

use embedded_graphics::prelude::Size;
use log::{debug, trace};
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::{
    AeonNutConfig,
    HAND_BASE_FACTOR,
    HAND_TIP_HALF_WIDTH,
    HOUR_HAND_LENGTH_RATIO,
    KNOB_RADIUS_FACTOR,
    SECOND_HAND_HALF_WIDTH,
    inactive_overlay_alpha,
};
use crate::face::WatchFace;
use crate::geometry::{HandShape, Path, Rect, TickSet, Vec2, hand_outline, tick_set};
use crate::paint::{Paint, PaintStyle, StrokeCap, TextStyle};
use crate::surface::Surface;
use crate::time::{DisplayState, TimeSample};

/// Number of ticks around the dial; every third one is major.
const TICK_COUNT: usize = 12;
const MAJOR_TICK_EVERY: usize = 3;

/// Layout in screen space, recomputed whenever the surface size changes.
///
/// Hands are stored pointing at 12 o'clock and rotated per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AeonNutGeometry {
    pub size: Size,
    pub center: Vec2,
    pub ticks: TickSet,
    pub minute_hand: Path,
    pub hour_hand: Path,
    pub second_hand: Path,
    pub knob_radius: f32,
    /// Top of the logo text area.
    pub logo_top: f32,
    pub logo_text: &'static str,
    pub date_box: Rect,
}

impl AeonNutGeometry {
    /// Layout for an unattached face; draws nothing.
    pub fn empty() -> Self {
        Self {
            size: Size::zero(),
            center: Vec2::zero(),
            ticks: TickSet::new(),
            minute_hand: Path::new(),
            hour_hand: Path::new(),
            second_hand: Path::new(),
            knob_radius: 0.0,
            logo_top: 0.0,
            logo_text: "",
            date_box: Rect::default(),
        }
    }

    pub fn compute(
        config: &AeonNutConfig,
        size: Size,
    ) -> Self {
        if size.width == 0 || size.height == 0 {
            return Self::empty();
        }

        let (w, h) = (size.width as f32, size.height as f32);
        let center = Vec2::new(w / 2.0, h / 2.0);
        let tw = config.tick_width;
        let rim = config.tick_margin + config.tick_length;

        let ticks = tick_set(
            center,
            center.y,
            TICK_COUNT,
            MAJOR_TICK_EVERY,
            tw,
            2.0 * tw,
            config.tick_length,
            config.tick_margin,
        );

        let kite = HandShape::Kite {
            tip_half_width: HAND_TIP_HALF_WIDTH,
        };
        let base = HAND_BASE_FACTOR * tw;
        let minute_hand = hand_outline(center, base, center.y, kite);
        let hour_tip = ((1.0 - HOUR_HAND_LENGTH_RATIO) * f64::from(center.y)) as i32 as f32;
        let hour_hand = hand_outline(center, base, center.y - hour_tip, kite);
        let second_hand = Path::rect(
            center.x - SECOND_HAND_HALF_WIDTH,
            0.0,
            center.x + SECOND_HAND_HALF_WIDTH,
            center.y,
        );

        let half_box = config.date_box_size / 2.0;
        let date_bottom = (h - rim - config.date_margin_bottom).trunc();
        let date_box = Rect::from_edges(
            center.x - half_box,
            date_bottom - config.date_box_size,
            center.x + half_box,
            date_bottom,
        );

        Self {
            size,
            center,
            ticks,
            minute_hand,
            hour_hand,
            second_hand,
            knob_radius: (tw * KNOB_RADIUS_FACTOR).trunc(),
            logo_top: (rim + config.logo_margin_top).trunc(),
            logo_text: config.logo_text,
            date_box,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.size.width == 0 || self.size.height == 0 }
}

/// Paints for one display state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeonNutStyles {
    /// Stroke width is replaced per tick.
    pub tick: Paint,
    pub logo: TextStyle,
    pub date: TextStyle,
    pub date_box: Paint,
    pub hand: Paint,
    pub second_hand: Paint,
    pub overlay: Paint,
}

impl AeonNutStyles {
    /// The palette is the same in both states; ambient dimming comes from the overlay.
    pub fn resolve(
        config: &AeonNutConfig,
        _active: bool,
    ) -> Self {
        Self {
            tick: Paint::stroke(config.tick_color, config.tick_width).with_cap(StrokeCap::Square),
            logo: TextStyle::new(config.logo_typeface).with_color(config.text_color),
            date: TextStyle::new(config.date_typeface)
                .with_color(config.text_color)
                .with_style(PaintStyle::Stroke),
            date_box: Paint::stroke(config.text_color, 1.0),
            hand: Paint::fill(config.hand_color),
            second_hand: Paint::fill(config.second_hand_color),
            overlay: Paint::fill(config.overlay_color).with_alpha(inactive_overlay_alpha()),
        }
    }
}

/// Horizontal origin that centers text of `text_width` on a surface of `surface_width`.
#[inline]
fn centered_x(
    surface_width: u32,
    text_width: u32,
) -> f32 {
    (text_width / 2 + surface_width.saturating_sub(text_width) / 2) as f32
}

/// Draw one AeonNut frame.
pub fn render_aeon_nut<S: Surface>(
    surface: &mut S,
    time: &TimeSample,
    state: DisplayState,
    geometry: &AeonNutGeometry,
    styles: &AeonNutStyles,
) -> Result<(), S::Error> {
    if geometry.is_empty() {
        return Ok(());
    }
    let width = geometry.size.width;
    let center = geometry.center;

    for tick in &geometry.ticks {
        surface.draw_line(tick.start, tick.end, &styles.tick.with_stroke_width(tick.width))?;
    }

    let logo = styles.logo.measure(geometry.logo_text);
    let logo_origin = Vec2::new(centered_x(width, logo.width), geometry.logo_top + (logo.height / 2) as f32);
    surface.draw_text(geometry.logo_text, logo_origin, &styles.logo)?;

    surface.draw_rect(geometry.date_box, &styles.date_box)?;
    let day = time.day_text();
    let date = styles.date.measure(&day);
    let date_origin = Vec2::new(
        centered_x(width, date.width),
        geometry.date_box.center().y + (date.height / 2) as f32,
    );
    surface.draw_text(&day, date_origin, &styles.date)?;

    surface.draw_circle(center, geometry.knob_radius, &styles.hand)?;

    if state.active {
        surface.draw_path(&geometry.second_hand.rotated(time.second_angle(), center), &styles.second_hand)?;
    }
    surface.draw_path(&geometry.minute_hand.rotated(time.minute_angle(), center), &styles.hand)?;
    surface.draw_path(&geometry.hour_hand.rotated(time.hour_angle(), center), &styles.hand)?;

    if !state.active {
        surface.draw_rect(Rect::from_size(geometry.size), &styles.overlay)?;
    }

    Ok(())
}

pub struct AeonNut {
    config: AeonNutConfig,
    geometry: AeonNutGeometry,
    styles: AeonNutStyles,
    time: TimeSample,
    state: DisplayState,
}

impl AeonNut {
    pub fn new(config: AeonNutConfig) -> Self {
        let state = DisplayState::default();
        Self {
            geometry: AeonNutGeometry::empty(),
            styles: AeonNutStyles::resolve(&config, state.active),
            config,
            time: TimeSample::default(),
            state,
        }
    }

    #[inline]
    pub const fn geometry(&self) -> &AeonNutGeometry { &self.geometry }

    #[inline]
    pub const fn state(&self) -> DisplayState { self.state }
}

impl Default for AeonNut {
    fn default() -> Self { Self::new(AeonNutConfig::DEFAULT) }
}

impl WatchFace for AeonNut {
    fn name(&self) -> &'static str { "aeon-nut" }

    fn attach(
        &mut self,
        size: Size,
    ) {
        if size == self.geometry.size {
            return;
        }
        self.geometry = AeonNutGeometry::compute(&self.config, size);
        debug!(
            "aeon-nut: geometry for {}x{}, knob r={}, date box at y={}",
            size.width,
            size.height,
            self.geometry.knob_radius,
            self.geometry.date_box.origin.y
        );
    }

    fn detach(&mut self) { debug!("aeon-nut: detached"); }

    fn on_time_changed(
        &mut self,
        time: TimeSample,
    ) {
        trace!("aeon-nut: time {:02}:{:02}:{:02}", time.hour, time.minute, time.second);
        self.time = time;
    }

    fn on_active_state_changed(
        &mut self,
        active: bool,
    ) {
        self.state = DisplayState::new(active);
        self.styles = AeonNutStyles::resolve(&self.config, active);
        debug!("aeon-nut: styles resolved, active={active}");
    }

    fn render<S: Surface>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        render_aeon_nut(surface, &self.time, self.state, &self.geometry, &self.styles)
    }
}
