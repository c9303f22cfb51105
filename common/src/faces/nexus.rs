//! Nexus: four colored quarter rings and two rounded hands with a soft shadow.
//!
//! Nexus looks the same in both display states. It has no second hand and no
//! ambient dimming.

use embedded_graphics::prelude::Size;
use log::{debug, trace};

use crate::config::{HOUR_HAND_EDGE_RINGS, MINUTE_HAND_EDGE_RINGS, NexusConfig};
use crate::face::WatchFace;
use crate::geometry::{HandShape, Path, Rect, Vec2, hand_outline, quadrant_clip, quarter_arc};
use crate::paint::{Paint, Shadow};
use crate::surface::Surface;
use crate::time::TimeSample;

/// The base ring arc covers the top-left quadrant.
const BASE_ARC_START: f32 = 180.0;
const BASE_ARC_SWEEP: f32 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NexusGeometry {
    pub size: Size,
    pub center: Vec2,
    /// Clockwise from the top-left quadrant.
    pub arcs: [Path; 4],
    /// Clip for the arc with the same index.
    pub clips: [Rect; 4],
    pub hour_hand: Path,
    pub minute_hand: Path,
}

impl NexusGeometry {
    pub fn empty() -> Self {
        Self {
            size: Size::zero(),
            center: Vec2::zero(),
            arcs: Default::default(),
            clips: [Rect::default(); 4],
            hour_hand: Path::new(),
            minute_hand: Path::new(),
        }
    }

    pub fn compute(
        config: &NexusConfig,
        size: Size,
    ) -> Self {
        if size.width == 0 || size.height == 0 {
            return Self::empty();
        }

        let (w, h) = (size.width as f32, size.height as f32);
        let center = Vec2::new(w / 2.0, h / 2.0);
        let thickness = config.ring_thickness;

        let inset = config.ring_outer_margin + thickness;
        let bounds = Rect::from_edges(inset, inset, w - inset, h - inset);
        let base_arc = quarter_arc(bounds, BASE_ARC_START, BASE_ARC_SWEEP);
        let arcs = core::array::from_fn(|i| base_arc.rotated(90.0 * i as f32, center));
        let clips = core::array::from_fn(|i| quadrant_clip(size, i as u8, thickness));

        let shape = HandShape::Rounded {
            tip_radius: config.hand_radius_top,
        };
        // Tip cap center sits `edge_rings * thickness - tip_radius` below the top edge
        let hand = |edge_rings: f32| {
            let length = center.y - (edge_rings * thickness - config.hand_radius_top);
            hand_outline(center, config.hand_radius_center, length, shape)
        };

        Self {
            size,
            center,
            arcs,
            clips,
            hour_hand: hand(HOUR_HAND_EDGE_RINGS),
            minute_hand: hand(MINUTE_HAND_EDGE_RINGS),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.size.width == 0 || self.size.height == 0 }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NexusStyles {
    /// Clockwise from the top-left quadrant.
    pub rings: [Paint; 4],
    pub hand: Paint,
}

impl NexusStyles {
    /// Same paints whether active or not.
    pub fn resolve(
        config: &NexusConfig,
        _active: bool,
    ) -> Self {
        Self {
            rings: config.ring_colors.map(|color| Paint::stroke(color, config.ring_thickness)),
            hand: Paint::fill(config.hand_color).with_shadow(Shadow {
                radius: config.hand_shadow_radius,
                color: config.hand_shadow_color,
            }),
        }
    }
}

/// Draw one Nexus frame.
pub fn render_nexus<S: Surface>(
    surface: &mut S,
    time: &TimeSample,
    geometry: &NexusGeometry,
    styles: &NexusStyles,
) -> Result<(), S::Error> {
    if geometry.is_empty() {
        return Ok(());
    }

    for ((arc, clip), paint) in geometry.arcs.iter().zip(&geometry.clips).zip(&styles.rings) {
        surface.save()?;
        surface.clip_rect(*clip)?;
        surface.draw_path(arc, paint)?;
        surface.restore()?;
    }

    let center = geometry.center;
    surface.draw_path(&geometry.hour_hand.rotated(time.hour_angle(), center), &styles.hand)?;
    surface.draw_path(&geometry.minute_hand.rotated(time.minute_angle(), center), &styles.hand)
}

pub struct Nexus {
    config: NexusConfig,
    geometry: NexusGeometry,
    styles: NexusStyles,
    time: TimeSample,
}

impl Nexus {
    pub fn new(config: NexusConfig) -> Self {
        Self {
            geometry: NexusGeometry::empty(),
            styles: NexusStyles::resolve(&config, true),
            config,
            time: TimeSample::default(),
        }
    }

    #[inline]
    pub const fn geometry(&self) -> &NexusGeometry { &self.geometry }
}

impl Default for Nexus {
    fn default() -> Self { Self::new(NexusConfig::DEFAULT) }
}

impl WatchFace for Nexus {
    fn name(&self) -> &'static str { "nexus" }

    fn attach(
        &mut self,
        size: Size,
    ) {
        if size == self.geometry.size {
            return;
        }
        self.geometry = NexusGeometry::compute(&self.config, size);
        debug!("nexus: geometry for {}x{}", size.width, size.height);
    }

    fn detach(&mut self) { debug!("nexus: detached"); }

    fn on_time_changed(
        &mut self,
        time: TimeSample,
    ) {
        trace!("nexus: time {:02}:{:02}", time.hour, time.minute);
        self.time = time;
    }

    fn on_active_state_changed(
        &mut self,
        active: bool,
    ) {
        self.styles = NexusStyles::resolve(&self.config, active);
        debug!("nexus: styles resolved, active={active}");
    }

    fn render<S: Surface>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        render_nexus(surface, &self.time, &self.geometry, &self.styles)
    }
}
