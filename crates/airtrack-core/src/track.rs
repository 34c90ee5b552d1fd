//! Tracks and draft tracks.
//!
//! A track carries its position twice, as `(x, y)` and as `(r, a)`. The
//! Cartesian pair is authoritative once the track is in the store; the
//! polar pair is re-derived after every change and kept at display
//! precision.

use serde::{Deserialize, Serialize};

use crate::enums::{DraftField, EntryMode};
use crate::error::{ensure_finite, AirtrackError, AirtrackResult};
use crate::geometry::{heading_velocity, to_cartesian, to_polar};
use crate::types::{Position, Velocity};

/// One aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    /// Distance from the airport.
    pub r: f64,
    /// Position angle, degrees in `[0, 360)`.
    pub a: f64,
    /// Speed.
    pub v: f64,
    /// Heading, degrees. Independent of `a`.
    pub d: f64,
    pub selected: bool,
}

impl Track {
    /// Build a track from Cartesian position and kinematics, deriving `r, a`.
    pub fn new(id: u32, x: f64, y: f64, v: f64, d: f64) -> Self {
        let polar = to_polar(x, y);
        Self {
            id,
            x,
            y,
            r: polar.r,
            a: polar.a,
            v,
            d,
            selected: false,
        }
    }

    /// Promote a draft into a stored, unselected track.
    ///
    /// Only the draft's `x, y` are kept; `r, a` are re-derived so a polar
    /// entry such as `a = 400` or `r = -5` is stored in normal form.
    pub fn from_draft(id: u32, draft: &DraftTrack) -> Self {
        Self::new(id, draft.x, draft.y, draft.v, draft.d)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Velocity vector along the heading.
    pub fn velocity(&self) -> Velocity {
        heading_velocity(self.d, self.v)
    }

    /// Move the track and re-derive its polar form.
    pub fn set_position(&mut self, position: Position) {
        self.x = position.x;
        self.y = position.y;
        self.sync_polar();
    }

    /// Recompute `r, a` from `x, y`.
    pub fn sync_polar(&mut self) {
        let polar = to_polar(self.x, self.y);
        self.r = polar.r;
        self.a = polar.a;
    }
}

/// A track being composed before insertion. All zero by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftTrack {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub a: f64,
    pub v: f64,
    pub d: f64,
}

impl DraftTrack {
    /// Apply a user edit to one field, then re-derive the other representation.
    ///
    /// Fields that are derived in `mode` cannot be edited.
    pub fn edit(&mut self, field: DraftField, value: f64, mode: EntryMode) -> AirtrackResult<()> {
        if field.is_derived_in(mode) {
            return Err(AirtrackError::DerivedField { field, mode });
        }
        let value = ensure_finite(field_name(field), value)?;
        match field {
            DraftField::X => self.x = value,
            DraftField::Y => self.y = value,
            DraftField::R => self.r = value,
            DraftField::A => self.a = value,
            DraftField::V => self.v = value,
            DraftField::D => self.d = value,
        }
        *self = convert(*self, mode);
        Ok(())
    }
}

/// Recompute the derived representation of a draft for the given entry mode.
///
/// Cartesian mode derives `r, a` from `x, y`; polar mode derives `x, y`
/// from `r, a`. Speed and heading pass through untouched.
pub fn convert(draft: DraftTrack, mode: EntryMode) -> DraftTrack {
    match mode {
        EntryMode::Cartesian => {
            let polar = to_polar(draft.x, draft.y);
            DraftTrack {
                r: polar.r,
                a: polar.a,
                ..draft
            }
        }
        EntryMode::Polar => {
            let position = to_cartesian(draft.r, draft.a);
            DraftTrack {
                x: position.x,
                y: position.y,
                ..draft
            }
        }
    }
}

fn field_name(field: DraftField) -> &'static str {
    match field {
        DraftField::X => "x",
        DraftField::Y => "y",
        DraftField::R => "r",
        DraftField::A => "a",
        DraftField::V => "v",
        DraftField::D => "d",
    }
}
