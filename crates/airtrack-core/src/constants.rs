//! Behavioral constants and display parameters.

// --- Collision prediction ---

/// Two tracks must reach the meeting point within this many seconds of each other.
pub const SIMULTANEITY_TOLERANCE: f64 = 0.1;

/// Arrival times at or below this are "now", not a future meeting.
pub const ARRIVAL_EPSILON: f64 = 1e-9;

/// Slopes (and intercepts) closer than this are treated as equal.
pub const SLOPE_EPSILON: f64 = 1e-4;

/// Velocity components smaller than this fraction of the speed are snapped to zero,
/// so headings of 90° and 270° resolve to exactly vertical trajectories.
pub const VELOCITY_SNAP_RATIO: f64 = 1e-9;

// --- Display ---

/// Decimal places kept on derived representations and printed in reports.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Half-width of the square display grid around the airport (plane units).
pub const GRID_HALF_EXTENT: f64 = 8.0;

// --- Scenario seeding ---

/// Default RNG seed for generated traffic.
pub const DEFAULT_SEED: u64 = 42;

/// Minimum generated speed.
pub const RANDOM_TRAFFIC_MIN_SPEED: f64 = 50.0;

/// Maximum generated speed (exclusive).
pub const RANDOM_TRAFFIC_MAX_SPEED: f64 = 250.0;
