//! Snapshot builder: assembles the TrackingSnapshot from engine state.

use airtrack_core::enums::EntryMode;
use airtrack_core::state::{TrackView, TrackingSnapshot};
use airtrack_core::track::DraftTrack;

use crate::store::TrackStore;

/// Build the presentation view of the current state.
pub fn build_snapshot(
    store: &TrackStore,
    draft: &DraftTrack,
    entry_mode: EntryMode,
    report: &str,
) -> TrackingSnapshot {
    TrackingSnapshot {
        tracks: store.iter().map(TrackView::from).collect(),
        selected_ids: store.selected_ids(),
        draft: *draft,
        entry_mode,
        report: report.to_string(),
    }
}
