//! Headless rendering: draw a face into a framebuffer and write it as PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::info;
use watchfaces_common::colors::BLACK;
use watchfaces_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchfaces_common::surface::{FrameBuffer, GraphicsSurface};
use watchfaces_common::{AnyFace, FaceKind, TimeSample, Watch};

use crate::timing::OUTPUT_SCALE;

pub const SCREEN: Size = Size::new(SCREEN_WIDTH, SCREEN_HEIGHT);

/// Pixel storage for one full frame.
pub fn frame_pixels() -> Vec<Rgb565> { vec![BLACK; (SCREEN.width * SCREEN.height) as usize] }

/// Clear `pixels` and draw the watch into them. Returns whether a frame was drawn.
pub fn render_into(
    watch: &mut Watch<AnyFace>,
    pixels: &mut [Rgb565],
) -> bool {
    let mut fb = FrameBuffer::new(pixels, SCREEN.width);
    fb.clear_buffer(BLACK);
    watch.draw(&mut GraphicsSurface::new(&mut fb))
}

/// Copy a rendered frame onto the simulator display.
pub fn blit(
    display: &mut SimulatorDisplay<Rgb565>,
    pixels: &[Rgb565],
) -> Result<()> {
    display.fill_contiguous(&Rectangle::new(Point::zero(), SCREEN), pixels.iter().copied())?;
    Ok(())
}

pub fn snapshot_name(
    kind: FaceKind,
    active: bool,
) -> String {
    format!("{}-{}.png", kind.name(), if active { "active" } else { "ambient" })
}

/// Render one face in one state and write it to `out_dir`.
pub fn write_snapshot(
    kind: FaceKind,
    active: bool,
    time: TimeSample,
    out_dir: &Path,
) -> Result<PathBuf> {
    let mut watch = Watch::new(kind.build());
    watch.attach(SCREEN, active);
    watch.tick(time);

    let mut pixels = frame_pixels();
    if !render_into(&mut watch, &mut pixels) {
        bail!("{} frame could not be rendered", kind.name());
    }

    let mut display = SimulatorDisplay::<Rgb565>::new(SCREEN);
    blit(&mut display, &pixels)?;

    let path = out_dir.join(snapshot_name(kind, active));
    let settings = OutputSettingsBuilder::new().scale(OUTPUT_SCALE).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!("wrote {}", path.display());
    Ok(path)
}
