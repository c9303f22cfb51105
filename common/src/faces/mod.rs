//! Watch-face implementations and runtime face selection.

mod aeon_nut;
mod nexus;

pub use aeon_nut::{AeonNut, AeonNutGeometry, AeonNutStyles, render_aeon_nut};
pub use nexus::{Nexus, NexusGeometry, NexusStyles, render_nexus};

use embedded_graphics::prelude::Size;

use crate::face::WatchFace;
use crate::surface::Surface;
use crate::time::TimeSample;

/// Available faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    AeonNut,
    Nexus,
}

impl FaceKind {
    pub const ALL: [Self; 2] = [Self::AeonNut, Self::Nexus];

    /// Look a face up by name. Case-insensitive; `aeon-nut` and `aeonnut` both work.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("aeon-nut") || name.eq_ignore_ascii_case("aeonnut") {
            Some(Self::AeonNut)
        } else if name.eq_ignore_ascii_case("nexus") {
            Some(Self::Nexus)
        } else {
            None
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::AeonNut => "aeon-nut",
            Self::Nexus => "nexus",
        }
    }

    /// Construct the face with its default configuration.
    pub fn build(self) -> AnyFace {
        match self {
            Self::AeonNut => AnyFace::AeonNut(AeonNut::default()),
            Self::Nexus => AnyFace::Nexus(Nexus::default()),
        }
    }
}

/// Either face behind one concrete type, for hosts that switch at runtime.
pub enum AnyFace {
    AeonNut(AeonNut),
    Nexus(Nexus),
}

impl AnyFace {
    pub const fn kind(&self) -> FaceKind {
        match self {
            Self::AeonNut(_) => FaceKind::AeonNut,
            Self::Nexus(_) => FaceKind::Nexus,
        }
    }
}

impl WatchFace for AnyFace {
    fn name(&self) -> &'static str { self.kind().name() }

    fn attach(
        &mut self,
        size: Size,
    ) {
        match self {
            Self::AeonNut(face) => face.attach(size),
            Self::Nexus(face) => face.attach(size),
        }
    }

    fn detach(&mut self) {
        match self {
            Self::AeonNut(face) => face.detach(),
            Self::Nexus(face) => face.detach(),
        }
    }

    fn on_time_changed(
        &mut self,
        time: TimeSample,
    ) {
        match self {
            Self::AeonNut(face) => face.on_time_changed(time),
            Self::Nexus(face) => face.on_time_changed(time),
        }
    }

    fn on_active_state_changed(
        &mut self,
        active: bool,
    ) {
        match self {
            Self::AeonNut(face) => face.on_active_state_changed(active),
            Self::Nexus(face) => face.on_active_state_changed(active),
        }
    }

    fn handle_seconds_in_dim_mode(&self) -> bool {
        match self {
            Self::AeonNut(face) => face.handle_seconds_in_dim_mode(),
            Self::Nexus(face) => face.handle_seconds_in_dim_mode(),
        }
    }

    fn render<S: Surface>(
        &self,
        surface: &mut S,
    ) -> Result<(), S::Error> {
        match self {
            Self::AeonNut(face) => face.render(surface),
            Self::Nexus(face) => face.render(surface),
        }
    }
}
