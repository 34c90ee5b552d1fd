//! Tracking snapshot: the complete visible state handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::constants::GRID_HALF_EXTENT;
use crate::enums::EntryMode;
use crate::geometry::round_display;
use crate::track::{DraftTrack, Track};

/// Everything the presentation layer renders after a command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingSnapshot {
    /// Tracks in ascending id order.
    pub tracks: Vec<TrackView>,
    pub selected_ids: Vec<u32>,
    pub draft: DraftTrack,
    pub entry_mode: EntryMode,
    /// Text of the last report; empty until the first announcing command.
    pub report: String,
}

/// A track as shown in the table and on the grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackView {
    pub id: u32,
    /// Display-rounded values.
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub a: f64,
    pub v: f64,
    pub d: f64,
    pub selected: bool,
    pub grid: GridPlacement,
}

/// Placement of a track icon on the square grid around the airport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridPlacement {
    /// Percent from the left edge.
    pub left_pct: f64,
    /// Percent from the top edge.
    pub top_pct: f64,
    /// Icon rotation in screen degrees (clockwise, 0 = up).
    pub rotation_deg: f64,
}

impl GridPlacement {
    pub fn for_track(track: &Track) -> Self {
        let span = 2.0 * GRID_HALF_EXTENT;
        Self {
            left_pct: (track.x + GRID_HALF_EXTENT) / span * 100.0,
            top_pct: (GRID_HALF_EXTENT - track.y) / span * 100.0,
            rotation_deg: 90.0 - track.d,
        }
    }
}

impl From<&Track> for TrackView {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id,
            x: round_display(track.x),
            y: round_display(track.y),
            r: round_display(track.r),
            a: round_display(track.a),
            v: round_display(track.v),
            d: round_display(track.d),
            selected: track.selected,
            grid: GridPlacement::for_track(track),
        }
    }
}
