//! Results of engine commands, with their human-readable rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::round_display;
use crate::types::Position;

/// Two tracks within the query radius of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearPair {
    pub first: u32,
    pub second: u32,
    pub distance: f64,
}

/// A predicted meeting of two tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionPrediction {
    pub first: u32,
    pub second: u32,
    /// Seconds from now.
    pub time: f64,
    pub point: Position,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Report {
    /// Draft or entry mode changed; nothing to announce.
    DraftUpdated,
    TrackInserted { id: u32 },
    SelectionToggled { id: u32, selected: bool },
    /// The id was not in the store.
    SelectionUnchanged { id: u32 },
    TracksDeleted { count: usize },
    Translated { count: usize, dx: f64, dy: f64 },
    Scaled { count: usize, sx: f64, sy: f64 },
    Rotated { count: usize, angle: f64, center: Position },
    NearOrigin { ids: Vec<u32> },
    NearEachOther { pairs: Vec<NearPair>, ids: Vec<u32> },
    /// Sorted by ascending time; empty when none were found.
    Collisions { predictions: Vec<CollisionPrediction> },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::DraftUpdated => Ok(()),
            Report::TrackInserted { id } => write!(f, "New track added with ID {id}"),
            Report::SelectionToggled { id, selected } => {
                let state = if *selected { "selected" } else { "deselected" };
                write!(f, "Track {id} {state}")
            }
            Report::SelectionUnchanged { id } => write!(f, "No track with ID {id}"),
            Report::TracksDeleted { count } => write!(f, "{count} track(s) deleted"),
            Report::Translated { count, dx, dy } => {
                write!(f, "Translated {count} selected track(s) by ({dx}, {dy})")
            }
            Report::Scaled { count, sx, sy } => write!(
                f,
                "Scaled {count} selected track(s) by factor X: {sx}, Y: {sy}"
            ),
            Report::Rotated {
                count,
                angle,
                center,
            } => write!(
                f,
                "Rotated {count} selected track(s) by {angle} degrees around ({}, {})",
                center.x, center.y
            ),
            Report::NearOrigin { ids } => {
                write!(f, "{} track(s) near the airport", ids.len())
            }
            Report::NearEachOther { pairs, .. } => {
                if pairs.is_empty() {
                    return write!(f, "No pair of nearby tracks found");
                }
                let lines: Vec<String> = pairs
                    .iter()
                    .map(|p| format!("Tracks {} and {} are near each other", p.first, p.second))
                    .collect();
                write!(f, "{}", lines.join(". "))
            }
            Report::Collisions { predictions } => {
                if predictions.is_empty() {
                    return write!(f, "No collision detected within the specified time.");
                }
                let lines: Vec<String> = predictions
                    .iter()
                    .map(|c| {
                        format!(
                            "Tracks {} and {} will collide in {:.2} seconds at point ({:.2}, {:.2})",
                            c.first,
                            c.second,
                            round_display(c.time),
                            round_display(c.point.x),
                            round_display(c.point.y)
                        )
                    })
                    .collect();
                write!(f, "{}", lines.join(". "))
            }
        }
    }
}
