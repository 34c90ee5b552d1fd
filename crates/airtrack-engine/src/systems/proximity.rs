//! Proximity queries: tracks near the airport and tracks near each other.
//!
//! Distances use full-precision Cartesian coordinates. Both queries are
//! inclusive at the threshold.

use std::collections::BTreeSet;

use airtrack_core::report::NearPair;
use airtrack_core::track::Track;

/// Ids of tracks within `threshold` of the airport.
pub fn near_origin<'a>(tracks: impl IntoIterator<Item = &'a Track>, threshold: f64) -> Vec<u32> {
    tracks
        .into_iter()
        .filter(|t| t.position().range() <= threshold)
        .map(|t| t.id)
        .collect()
}

/// Every unordered pair within `threshold` of each other, in store order,
/// plus the ascending set of ids that appear in any pair.
pub fn near_pairs(tracks: &[&Track], threshold: f64) -> (Vec<NearPair>, Vec<u32>) {
    let mut pairs = Vec::new();
    let mut ids = BTreeSet::new();

    for (i, a) in tracks.iter().enumerate() {
        for b in &tracks[i + 1..] {
            let distance = a.position().range_to(&b.position());
            if distance <= threshold {
                pairs.push(NearPair {
                    first: a.id,
                    second: b.id,
                    distance,
                });
                ids.insert(a.id);
                ids.insert(b.id);
            }
        }
    }

    (pairs, ids.into_iter().collect())
}
