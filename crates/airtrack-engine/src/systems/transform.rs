//! Affine transform system: moves the selected tracks.

use airtrack_core::transform::AffineTransform;

use crate::store::TrackStore;

/// Apply `transform` to every selected track and re-derive their polar form.
/// Unselected tracks are untouched. Returns the number of tracks moved.
pub fn run(store: &mut TrackStore, transform: &AffineTransform) -> usize {
    let mut moved = 0;
    for track in store.iter_mut().filter(|t| t.selected) {
        let position = transform.apply(track.position());
        track.set_position(position);
        moved += 1;
    }
    moved
}
