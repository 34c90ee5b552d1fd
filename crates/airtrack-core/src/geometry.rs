//! Cartesian/polar conversion, angle normalization and heading vectors.
//!
//! Angles are degrees, counterclockwise from the +x axis. Conversions
//! round to [`DISPLAY_DECIMALS`] because their results are stored on
//! tracks and drafts; predicates work from the full-precision Cartesian
//! coordinates instead.

use crate::constants::{DISPLAY_DECIMALS, VELOCITY_SNAP_RATIO};
use crate::types::{Polar, Position, Velocity};

/// Wrap any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Round to the display precision (2 decimal places).
pub fn round_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // avoid "-0.00" in views and reports
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Full-precision polar form of a Cartesian point.
///
/// The angle of the origin is 0 (atan2(0, 0)).
pub fn polar_of(x: f64, y: f64) -> Polar {
    let r = x.hypot(y);
    let a = normalize_degrees(y.atan2(x).to_degrees());
    Polar::new(r, a)
}

/// Full-precision Cartesian form of a polar point.
pub fn cartesian_of(r: f64, a: f64) -> Position {
    let (sin, cos) = a.to_radians().sin_cos();
    Position::new(r * cos, r * sin)
}

/// `(x, y) -> (r, a)`, rounded for storage.
pub fn to_polar(x: f64, y: f64) -> Polar {
    let p = polar_of(x, y);
    // rounding 359.996 lands on 360.0
    Polar::new(round_display(p.r), normalize_degrees(round_display(p.a)))
}

/// `(r, a) -> (x, y)`, rounded for storage.
pub fn to_cartesian(r: f64, a: f64) -> Position {
    let p = cartesian_of(r, a);
    Position::new(round_display(p.x), round_display(p.y))
}

/// Velocity vector for a heading (degrees) and speed.
///
/// Components negligible relative to the speed are snapped to zero so that
/// due-north and due-south headings produce exactly vertical motion.
pub fn heading_velocity(heading_deg: f64, speed: f64) -> Velocity {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    let snap = |c: f64| {
        if c.abs() < VELOCITY_SNAP_RATIO {
            0.0
        } else {
            c
        }
    };
    Velocity::new(speed * snap(cos), speed * snap(sin))
}
