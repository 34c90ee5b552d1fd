//! The authoritative in-memory collection of tracks.

use std::collections::{BTreeMap, BTreeSet};

use airtrack_core::track::{DraftTrack, Track};

/// Tracks keyed by id, iterated in ascending id order.
///
/// Ids are issued as one past the highest id the store has ever held,
/// so they are never reused after deletion.
#[derive(Debug, Clone, Default)]
pub struct TrackStore {
    tracks: BTreeMap<u32, Track>,
    highest_issued: u32,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing tracks, keeping their ids.
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut store = Self::new();
        for track in tracks {
            store.highest_issued = store.highest_issued.max(track.id);
            store.tracks.insert(track.id, track);
        }
        store
    }

    /// The id the next insertion will receive.
    pub fn next_id(&self) -> u32 {
        let max_existing = self.tracks.keys().next_back().copied().unwrap_or(0);
        max_existing.max(self.highest_issued) + 1
    }

    /// Append a draft as a new, unselected track and return it.
    pub fn insert_draft(&mut self, draft: &DraftTrack) -> Track {
        let id = self.next_id();
        let track = Track::from_draft(id, draft);
        self.highest_issued = id;
        self.tracks.insert(id, track.clone());
        track
    }

    /// Flip the selection of one track. `None` if the id is absent.
    pub fn toggle_selection(&mut self, id: u32) -> Option<bool> {
        let track = self.tracks.get_mut(&id)?;
        track.selected = !track.selected;
        Some(track.selected)
    }

    /// Remove every selected track, returning how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|_, track| !track.selected);
        before - self.tracks.len()
    }

    /// Replace the selection with exactly `ids`.
    pub fn select_only(&mut self, ids: &BTreeSet<u32>) {
        for track in self.tracks.values_mut() {
            track.selected = ids.contains(&track.id);
        }
    }

    pub fn get(&self, id: u32) -> Option<&Track> {
        self.tracks.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Track> {
        self.tracks.values_mut()
    }

    pub fn selected_ids(&self) -> Vec<u32> {
        self.iter().filter(|t| t.selected).map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
