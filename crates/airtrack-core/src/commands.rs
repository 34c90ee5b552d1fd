//! Commands sent from the presentation layer to the engine.
//!
//! Each command is a discrete, synchronous request: the engine runs it to
//! completion over the current track set and answers with a [`Report`].
//!
//! [`Report`]: crate::report::Report

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// All possible user actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TrackCommand {
    // --- Draft composition ---
    /// Switch which representation the draft is typed in. Never converts.
    SetEntryMode { mode: EntryMode },
    /// Edit one draft field; the other representation is re-derived.
    EditDraft { field: DraftField, value: f64 },
    /// Insert the draft as a new track and reset it.
    InsertDraft,

    // --- Selection ---
    /// Flip the selection flag of one track.
    ToggleSelection { id: u32 },
    /// Remove every selected track.
    DeleteSelected,

    // --- Transforms (selected tracks only) ---
    Translate { dx: f64, dy: f64 },
    Scale { sx: f64, sy: f64 },
    /// Rotate by `angle` degrees about `center`.
    Rotate { angle: f64, center: Position },

    // --- Queries (replace the selection with the matches) ---
    /// Tracks within `threshold` of the airport.
    NearOrigin { threshold: f64 },
    /// Pairs of tracks within `threshold` of each other.
    NearEachOther { threshold: f64 },
    /// Pairs of tracks that meet within `time_bound` seconds.
    PredictCollisions { time_bound: f64 },
}
