//! Scenario definitions: the initial track population of a new engine.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use airtrack_core::constants::{
    GRID_HALF_EXTENT, RANDOM_TRAFFIC_MAX_SPEED, RANDOM_TRAFFIC_MIN_SPEED,
};
use airtrack_core::enums::ScenarioId;
use airtrack_core::track::Track;

/// Build the tracks for a scenario. Ids start at 1.
pub fn build_tracks(scenario: ScenarioId, rng: &mut ChaCha8Rng) -> Vec<Track> {
    match scenario {
        ScenarioId::Empty => Vec::new(),
        ScenarioId::Airport => build_airport(),
        ScenarioId::RandomTraffic { count } => build_random_traffic(count, rng),
    }
}

/// The five reference tracks the airport display opens with.
fn build_airport() -> Vec<Track> {
    vec![
        Track::new(1, 3.0, 4.0, 100.0, 0.0),
        Track::new(2, 5.0, 2.0, 150.0, 180.0),
        Track::new(3, 4.0, 4.0, 120.0, 90.0),
        Track::new(4, 6.0, 6.0, 80.0, 270.0),
        Track::new(5, 2.0, 3.0, 200.0, 45.0),
    ]
}

/// `count` tracks uniformly over the display grid with random kinematics.
fn build_random_traffic(count: u32, rng: &mut ChaCha8Rng) -> Vec<Track> {
    (1..=count)
        .map(|id| {
            let x = rng.gen_range(-GRID_HALF_EXTENT..GRID_HALF_EXTENT);
            let y = rng.gen_range(-GRID_HALF_EXTENT..GRID_HALF_EXTENT);
            let v = rng.gen_range(RANDOM_TRAFFIC_MIN_SPEED..RANDOM_TRAFFIC_MAX_SPEED);
            let d = rng.gen_range(0.0..360.0);
            Track::new(id, x, y, v, d)
        })
        .collect()
}
