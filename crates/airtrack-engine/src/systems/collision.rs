//! Collision prediction over straight-line extrapolation.
//!
//! Each track moves at constant velocity along its heading. For every
//! unordered pair the two paths are intersected as lines, then the
//! intersection is checked for direction (both tracks heading towards it)
//! and timing (both arrive within the horizon, within
//! [`SIMULTANEITY_TOLERANCE`] of each other).
//!
//! Degenerate geometry is resolved by case dispatch rather than by
//! guarding divisions:
//! - both paths vertical: collinear only if they share an x coordinate
//! - one path vertical: intersect at that track's x
//! - parallel paths: collinear only if the intercepts also match
//! - otherwise the unique slope/intercept intersection
//!
//! Collinear pairs meet where the gap between them closes; pairs whose
//! gap is opening (or constant) never meet.

use std::cmp::Ordering;

use airtrack_core::constants::{ARRIVAL_EPSILON, SIMULTANEITY_TOLERANCE, SLOPE_EPSILON};
use airtrack_core::report::CollisionPrediction;
use airtrack_core::track::Track;
use airtrack_core::types::{Position, Velocity};

/// Axis along which a shared line is parametrized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAxis {
    /// Vertical line: measure along y.
    Y,
    /// Any other line: measure along x.
    X,
}

impl LineAxis {
    fn position(self, p: &Position) -> f64 {
        match self {
            LineAxis::X => p.x,
            LineAxis::Y => p.y,
        }
    }

    fn velocity(self, v: &Velocity) -> f64 {
        match self {
            LineAxis::X => v.x,
            LineAxis::Y => v.y,
        }
    }
}

/// Predict every pair that meets within `time_bound` seconds, soonest first.
pub fn predict(tracks: &[&Track], time_bound: f64) -> Vec<CollisionPrediction> {
    let mut predictions = Vec::new();

    for (i, a) in tracks.iter().enumerate() {
        for b in &tracks[i + 1..] {
            if let Some(prediction) = predict_pair(a, b, time_bound) {
                predictions.push(prediction);
            }
        }
    }

    predictions.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
    predictions
}

/// Predict whether two tracks meet within `time_bound` seconds.
///
/// A stationary track has no path to intersect and never collides.
pub fn predict_pair(p1: &Track, p2: &Track, time_bound: f64) -> Option<CollisionPrediction> {
    let v1 = p1.velocity();
    let v2 = p2.velocity();
    if v1.is_stationary() || v2.is_stationary() {
        return None;
    }

    let pos1 = p1.position();
    let pos2 = p2.position();

    let point = if v1.x == 0.0 && v2.x == 0.0 {
        if (pos1.x - pos2.x).abs() >= SLOPE_EPSILON {
            return None;
        }
        return collinear_meeting(p1, p2, LineAxis::Y, time_bound);
    } else if v1.x == 0.0 {
        let x = pos1.x;
        Position::new(x, v2.y / v2.x * (x - pos2.x) + pos2.y)
    } else if v2.x == 0.0 {
        let x = pos2.x;
        Position::new(x, v1.y / v1.x * (x - pos1.x) + pos1.y)
    } else {
        let m1 = v1.y / v1.x;
        let m2 = v2.y / v2.x;
        let b1 = pos1.y - m1 * pos1.x;
        let b2 = pos2.y - m2 * pos2.x;

        if (m1 - m2).abs() < SLOPE_EPSILON {
            if (b1 - b2).abs() < SLOPE_EPSILON {
                return collinear_meeting(p1, p2, LineAxis::X, time_bound);
            }
            return None;
        }

        let x = (b2 - b1) / (m1 - m2);
        Position::new(x, m1 * x + b1)
    };

    // Either track moving away from the intersection rules the pair out
    if (point.x - pos1.x) * v1.x < 0.0 || (point.x - pos2.x) * v2.x < 0.0 {
        return None;
    }

    let t1 = time_to_reach(&pos1, &v1, &point);
    let t2 = time_to_reach(&pos2, &v2, &point);

    is_accepted(t1, t2, time_bound).then_some(CollisionPrediction {
        first: p1.id,
        second: p2.id,
        time: t1,
        point,
    })
}

/// Two tracks on a common line: find where the gap between them closes.
fn collinear_meeting(
    p1: &Track,
    p2: &Track,
    axis: LineAxis,
    time_bound: f64,
) -> Option<CollisionPrediction> {
    let pos1 = p1.position();
    let pos2 = p2.position();
    let v1 = p1.velocity();
    let v2 = p2.velocity();

    let gap = axis.position(&pos2) - axis.position(&pos1);
    let closing_rate = axis.velocity(&v1) - axis.velocity(&v2);

    // opening, constant, or already coincident
    if gap * closing_rate <= 0.0 {
        return None;
    }

    let t_meet = gap / closing_rate;
    let point = Position::from(pos1.as_dvec2() + v1.as_dvec2() * t_meet);

    let along = axis.position(&point);
    let t1 = (along - axis.position(&pos1)) / axis.velocity(&v1);
    let t2 = (along - axis.position(&pos2)) / axis.velocity(&v2);

    is_accepted(t1, t2, time_bound).then_some(CollisionPrediction {
        first: p1.id,
        second: p2.id,
        time: t1.min(t2),
        point,
    })
}

/// Time for a track to reach `point`, measured along x unless the track is
/// moving vertically.
fn time_to_reach(position: &Position, velocity: &Velocity, point: &Position) -> f64 {
    if velocity.x != 0.0 {
        (point.x - position.x) / velocity.x
    } else {
        (point.y - position.y) / velocity.y
    }
}

/// Both arrivals strictly in the future, inside the horizon, and nearly simultaneous.
fn is_accepted(t1: f64, t2: f64, time_bound: f64) -> bool {
    t1 > ARRIVAL_EPSILON
        && t2 > ARRIVAL_EPSILON
        && (t1 - t2).abs() < SIMULTANEITY_TOLERANCE
        && t1 <= time_bound
        && t2 <= time_bound
}
