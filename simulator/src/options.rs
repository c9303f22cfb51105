//! Command-line options.
//!
//! ```text
//! simulator [--face NAME] [--ambient] [--out DIR] [--at YYYY-MM-DDTHH:MM:SS] [--log FILTER] [--window]
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use watchfaces_common::FaceKind;

pub const USAGE: &str = "\
usage: simulator [options]

  --face NAME      aeon-nut or nexus (default: both)
  --ambient        ambient mode only (default: active and ambient snapshots)
  --out DIR        snapshot directory (default: snapshots)
  --at DATETIME    render this local time instead of now, e.g. 2024-05-09T03:15:45
  --log FILTER     env_logger filter, overrides RUST_LOG
  --window         open an interactive window (needs the `window` feature)
  -h, --help       show this help";

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub faces: Vec<FaceKind>,
    pub ambient_only: bool,
    pub out_dir: PathBuf,
    pub at: Option<NaiveDateTime>,
    pub log_filter: Option<String>,
    pub window: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            faces: FaceKind::ALL.to_vec(),
            ambient_only: false,
            out_dir: PathBuf::from("snapshots"),
            at: None,
            log_filter: None,
            window: false,
            help: false,
        }
    }
}

impl Options {
    /// Parse arguments, not including the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--face" => {
                    let name = value(&mut args, "--face")?;
                    let kind = FaceKind::from_name(&name).with_context(|| format!("unknown face '{name}'"))?;
                    opts.faces = vec![kind];
                }
                "--ambient" => opts.ambient_only = true,
                "--out" => opts.out_dir = PathBuf::from(value(&mut args, "--out")?),
                "--at" => {
                    let raw = value(&mut args, "--at")?;
                    let at = NaiveDateTime::parse_from_str(&raw, DATETIME_FORMAT)
                        .with_context(|| format!("invalid --at '{raw}', expected YYYY-MM-DDTHH:MM:SS"))?;
                    opts.at = Some(at);
                }
                "--log" => opts.log_filter = Some(value(&mut args, "--log")?),
                "--window" => opts.window = true,
                "-h" | "--help" => opts.help = true,
                other => bail!("unknown argument '{other}'\n\n{USAGE}"),
            }
        }

        Ok(opts)
    }
}

fn value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String> {
    args.next().with_context(|| format!("{flag} needs a value"))
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn parse(args: &[&str]) -> Result<Options> { Options::parse(args.iter().map(|s| (*s).to_owned())) }

    #[test]
    fn test_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.faces, [FaceKind::AeonNut, FaceKind::Nexus]);
    }

    #[test]
    fn test_all_flags() {
        let opts = parse(&[
            "--face",
            "nexus",
            "--ambient",
            "--out",
            "/tmp/frames",
            "--at",
            "2024-05-09T03:15:45",
            "--log",
            "debug",
            "--window",
        ])
        .unwrap();
        assert_eq!(opts.faces, [FaceKind::Nexus]);
        assert!(opts.ambient_only);
        assert_eq!(opts.out_dir, PathBuf::from("/tmp/frames"));
        let at = opts.at.unwrap();
        assert_eq!((at.hour(), at.minute(), at.second()), (3, 15, 45));
        assert_eq!(opts.log_filter.as_deref(), Some("debug"));
        assert!(opts.window);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--face", "digital"]).is_err());
        assert!(parse(&["--face"]).is_err());
        assert!(parse(&["--at", "03:15"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn test_help() {
        assert!(parse(&["-h"]).unwrap().help);
    }
}
