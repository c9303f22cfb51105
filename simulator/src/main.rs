//! Desktop simulator for the AeonNut and Nexus watch faces.
//!
//! By default every selected face is rendered in active and ambient mode and
//! written as PNG snapshots. With `--window` (and the `window` feature) the
//! face runs live in an SDL window instead.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod logging;
mod options;
mod snapshot;
mod timing;
#[cfg(feature = "window")]
mod window;

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use watchfaces_common::TimeSample;

use crate::logging::init_logging;
use crate::options::{Options, USAGE};
use crate::snapshot::write_snapshot;

fn main() -> Result<()> {
    let opts = Options::parse(std::env::args().skip(1))?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }
    init_logging(opts.log_filter.as_deref());

    if opts.window {
        return run_window(&opts);
    }

    let now = opts.at.unwrap_or_else(|| Local::now().naive_local());
    let time = TimeSample::from_datetime(&now);
    info!("rendering {:02}:{:02}:{:02}, day {}", time.hour, time.minute, time.second, time.day);

    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("failed to create {}", opts.out_dir.display()))?;

    let states: &[bool] = if opts.ambient_only { &[false] } else { &[true, false] };
    for &kind in &opts.faces {
        for &active in states {
            write_snapshot(kind, active, time, &opts.out_dir)?;
        }
    }

    Ok(())
}

#[cfg(feature = "window")]
fn run_window(opts: &Options) -> Result<()> {
    let kind = opts.faces.first().copied().unwrap_or(watchfaces_common::FaceKind::AeonNut);
    window::run(kind, !opts.ambient_only, opts.at)
}

#[cfg(not(feature = "window"))]
fn run_window(_opts: &Options) -> Result<()> {
    anyhow::bail!("built without the `window` feature; rebuild with `--features window`")
}
