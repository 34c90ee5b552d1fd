//! Enumeration types used throughout airtrack.

use serde::{Deserialize, Serialize};

/// Which representation of a draft position the user is typing in.
/// The other representation is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryMode {
    #[default]
    Cartesian,
    Polar,
}

/// Editable fields of a draft track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    X,
    Y,
    /// Radius (distance from the airport).
    R,
    /// Position angle in degrees.
    A,
    /// Speed.
    V,
    /// Heading in degrees.
    D,
}

impl DraftField {
    /// True if this field is derived (read-only) in the given entry mode.
    pub fn is_derived_in(self, mode: EntryMode) -> bool {
        match mode {
            EntryMode::Cartesian => matches!(self, DraftField::R | DraftField::A),
            EntryMode::Polar => matches!(self, DraftField::X | DraftField::Y),
        }
    }
}

/// Initial track population for a new engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScenarioId {
    /// No tracks.
    Empty,
    /// The five reference tracks around the airport.
    #[default]
    Airport,
    /// `count` tracks scattered over the display grid, seeded from the engine config.
    RandomTraffic { count: u32 },
}
