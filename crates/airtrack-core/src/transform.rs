//! Affine transforms applied to selected tracks.

use glam::{DMat2, DVec2};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, AirtrackResult};
use crate::types::Position;

/// A translate, origin-centred scale, or rotation about an arbitrary centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AffineTransform {
    Translate { dx: f64, dy: f64 },
    /// Scaling about the airport, not about each track.
    Scale { sx: f64, sy: f64 },
    /// Counterclockwise rotation by `angle` degrees about `center`.
    Rotate { angle: f64, center: Position },
}

impl AffineTransform {
    /// Map a point through the transform.
    ///
    /// Rotation uses the pre-rotation coordinates for both outputs
    /// (simultaneous rotation), so it preserves distances to the centre.
    pub fn apply(&self, p: Position) -> Position {
        let v = p.as_dvec2();
        let out = match *self {
            AffineTransform::Translate { dx, dy } => v + DVec2::new(dx, dy),
            AffineTransform::Scale { sx, sy } => v * DVec2::new(sx, sy),
            AffineTransform::Rotate { angle, center } => {
                let c = center.as_dvec2();
                DMat2::from_angle(angle.to_radians()) * (v - c) + c
            }
        };
        Position::from(out)
    }

    /// Reject non-finite parameters.
    pub fn validate(&self) -> AirtrackResult<()> {
        match *self {
            AffineTransform::Translate { dx, dy } => {
                ensure_finite("dx", dx)?;
                ensure_finite("dy", dy)?;
            }
            AffineTransform::Scale { sx, sy } => {
                ensure_finite("sx", sx)?;
                ensure_finite("sy", sy)?;
            }
            AffineTransform::Rotate { angle, center } => {
                ensure_finite("angle", angle)?;
                ensure_finite("cx", center.x)?;
                ensure_finite("cy", center.y)?;
            }
        }
        Ok(())
    }
}
