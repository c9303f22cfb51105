//! Interactive SDL window.
//!
//! Keys: `A` toggles active/ambient, `N` switches to the next face.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{info, warn};
use watchfaces_common::{AnyFace, FaceKind, TimeSample, Watch};

use crate::snapshot::{SCREEN, blit, frame_pixels, render_into};
use crate::timing::{FRAME_TIME, OUTPUT_SCALE};

fn next_face(kind: FaceKind) -> FaceKind {
    let i = FaceKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
    FaceKind::ALL[(i + 1) % FaceKind::ALL.len()]
}

fn attach(
    kind: FaceKind,
    active: bool,
) -> Watch<AnyFace> {
    let mut watch = Watch::new(kind.build());
    watch.attach(SCREEN, active);
    info!("showing {} ({})", kind.name(), if active { "active" } else { "ambient" });
    watch
}

/// Run until the window is closed. A fixed `at` freezes the clock.
pub fn run(
    kind: FaceKind,
    active: bool,
    at: Option<NaiveDateTime>,
) -> Result<()> {
    let mut display = SimulatorDisplay::<Rgb565>::new(SCREEN);
    let output_settings = OutputSettingsBuilder::new().scale(OUTPUT_SCALE).build();
    let mut window = Window::new("Watch faces", &output_settings);

    let mut kind = kind;
    let mut watch = attach(kind, active);
    let mut pixels = frame_pixels();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => {
                            let active = !watch.is_active();
                            watch.set_active(active);
                            info!("{}", if active { "active" } else { "ambient" });
                        }
                        Keycode::N => {
                            let active = watch.is_active();
                            watch.detach();
                            kind = next_face(kind);
                            watch = attach(kind, active);
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = at.unwrap_or_else(|| Local::now().naive_local());
        watch.tick(TimeSample::from_datetime(&now));

        if watch.is_dirty() {
            if render_into(&mut watch, &mut pixels) {
                blit(&mut display, &pixels)?;
            } else {
                warn!("frame skipped");
            }
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_face_cycles() {
        assert_eq!(next_face(FaceKind::AeonNut), FaceKind::Nexus);
        assert_eq!(next_face(FaceKind::Nexus), FaceKind::AeonNut);
    }
}
