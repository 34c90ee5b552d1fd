//! Tracking engine: the single owner of track state.
//!
//! `TrackingEngine` holds the track store, the draft being composed and
//! the entry mode. Every command runs to completion against the current
//! state and returns a `Report`. Headless, with no presentation
//! dependency, so behavior is fully testable.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use airtrack_core::commands::TrackCommand;
use airtrack_core::constants::DEFAULT_SEED;
use airtrack_core::enums::{DraftField, EntryMode, ScenarioId};
use airtrack_core::error::{ensure_finite, AirtrackResult};
use airtrack_core::report::{CollisionPrediction, NearPair, Report};
use airtrack_core::state::TrackingSnapshot;
use airtrack_core::track::{DraftTrack, Track};
use airtrack_core::transform::AffineTransform;

use crate::scenario;
use crate::store::TrackStore;
use crate::systems;

/// Configuration for a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial track population.
    pub scenario: ScenarioId,
    /// RNG seed for generated traffic. Same seed = same tracks.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioId::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// The tracking engine. Owns the store and the draft.
pub struct TrackingEngine {
    store: TrackStore,
    draft: DraftTrack,
    entry_mode: EntryMode,
    report: String,
}

impl TrackingEngine {
    /// Create an engine seeded with the configured scenario.
    pub fn new(config: EngineConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let tracks = scenario::build_tracks(config.scenario, &mut rng);
        info!(scenario = ?config.scenario, tracks = tracks.len(), "engine created");
        Self::with_store(TrackStore::from_tracks(tracks))
    }

    /// Create an engine over an existing store.
    pub fn with_store(store: TrackStore) -> Self {
        Self {
            store,
            draft: DraftTrack::default(),
            entry_mode: EntryMode::default(),
            report: String::new(),
        }
    }

    /// Run one command and record its report text.
    pub fn execute(&mut self, command: TrackCommand) -> AirtrackResult<Report> {
        debug!(?command, "handling command");
        let result = self.handle_command(command);
        match &result {
            Ok(Report::DraftUpdated) => {}
            Ok(report) => self.report = report.to_string(),
            Err(e) => warn!("command rejected: {e}"),
        }
        result
    }

    /// Current view for the presentation layer.
    pub fn snapshot(&self) -> TrackingSnapshot {
        systems::snapshot::build_snapshot(&self.store, &self.draft, self.entry_mode, &self.report)
    }

    pub fn store(&self) -> &TrackStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftTrack {
        &self.draft
    }

    pub fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// Text of the last announcing command.
    pub fn report(&self) -> &str {
        &self.report
    }

    // --- Draft composition ---

    /// Switch entry mode. Derived fields are left as they are.
    pub fn set_entry_mode(&mut self, mode: EntryMode) {
        self.entry_mode = mode;
    }

    /// Edit one draft field in the current entry mode.
    pub fn edit_draft(&mut self, field: DraftField, value: f64) -> AirtrackResult<()> {
        self.draft.edit(field, value, self.entry_mode)
    }

    /// Insert the draft as a new track and reset the draft to zero.
    pub fn insert_track(&mut self) -> Track {
        let track = self.store.insert_draft(&self.draft);
        self.draft = DraftTrack::default();
        info!(id = track.id, x = track.x, y = track.y, "track inserted");
        track
    }

    // --- Selection ---

    /// Flip a track's selection. Absent ids are ignored.
    pub fn toggle_selection(&mut self, id: u32) -> Option<bool> {
        let selected = self.store.toggle_selection(id);
        if selected.is_none() {
            debug!(id, "toggle ignored, no such track");
        }
        selected
    }

    /// Remove all selected tracks.
    pub fn delete_selected(&mut self) -> usize {
        let count = self.store.delete_selected();
        info!(count, "selected tracks deleted");
        count
    }

    // --- Transforms ---

    /// Apply a transform to the selected tracks. Returns how many moved.
    pub fn apply_transform(&mut self, transform: &AffineTransform) -> AirtrackResult<usize> {
        transform.validate()?;
        let count = systems::transform::run(&mut self.store, transform);
        info!(?transform, count, "transform applied");
        Ok(count)
    }

    // --- Queries ---

    /// Select exactly the tracks within `threshold` of the airport.
    pub fn query_near_origin(&mut self, threshold: f64) -> AirtrackResult<Vec<u32>> {
        let threshold = ensure_finite("threshold", threshold)?;
        let ids = systems::proximity::near_origin(self.store.iter(), threshold);
        self.store.select_only(&ids.iter().copied().collect());
        info!(threshold, count = ids.len(), "near-origin query");
        Ok(ids)
    }

    /// Select exactly the tracks that have a neighbour within `threshold`.
    pub fn query_near_each_other(
        &mut self,
        threshold: f64,
    ) -> AirtrackResult<(Vec<NearPair>, Vec<u32>)> {
        let threshold = ensure_finite("threshold", threshold)?;
        let tracks: Vec<&Track> = self.store.iter().collect();
        let (pairs, ids) = systems::proximity::near_pairs(&tracks, threshold);
        let selection: BTreeSet<u32> = ids.iter().copied().collect();
        self.store.select_only(&selection);
        info!(threshold, pairs = pairs.len(), "near-pairs query");
        Ok((pairs, ids))
    }

    /// Pairs that meet within `time_bound` seconds, soonest first.
    /// Does not change the selection.
    pub fn predict_collisions(&self, time_bound: f64) -> AirtrackResult<Vec<CollisionPrediction>> {
        let time_bound = ensure_finite("time_bound", time_bound)?;
        let tracks: Vec<&Track> = self.store.iter().collect();
        let predictions = systems::collision::predict(&tracks, time_bound);
        info!(time_bound, count = predictions.len(), "collision prediction");
        Ok(predictions)
    }

    /// Dispatch a single command.
    fn handle_command(&mut self, command: TrackCommand) -> AirtrackResult<Report> {
        match command {
            TrackCommand::SetEntryMode { mode } => {
                self.set_entry_mode(mode);
                Ok(Report::DraftUpdated)
            }
            TrackCommand::EditDraft { field, value } => {
                self.edit_draft(field, value)?;
                Ok(Report::DraftUpdated)
            }
            TrackCommand::InsertDraft => {
                let track = self.insert_track();
                Ok(Report::TrackInserted { id: track.id })
            }
            TrackCommand::ToggleSelection { id } => Ok(match self.toggle_selection(id) {
                Some(selected) => Report::SelectionToggled { id, selected },
                None => Report::SelectionUnchanged { id },
            }),
            TrackCommand::DeleteSelected => Ok(Report::TracksDeleted {
                count: self.delete_selected(),
            }),
            TrackCommand::Translate { dx, dy } => {
                let count = self.apply_transform(&AffineTransform::Translate { dx, dy })?;
                Ok(Report::Translated { count, dx, dy })
            }
            TrackCommand::Scale { sx, sy } => {
                let count = self.apply_transform(&AffineTransform::Scale { sx, sy })?;
                Ok(Report::Scaled { count, sx, sy })
            }
            TrackCommand::Rotate { angle, center } => {
                let count = self.apply_transform(&AffineTransform::Rotate { angle, center })?;
                Ok(Report::Rotated {
                    count,
                    angle,
                    center,
                })
            }
            TrackCommand::NearOrigin { threshold } => Ok(Report::NearOrigin {
                ids: self.query_near_origin(threshold)?,
            }),
            TrackCommand::NearEachOther { threshold } => {
                let (pairs, ids) = self.query_near_each_other(threshold)?;
                Ok(Report::NearEachOther { pairs, ids })
            }
            TrackCommand::PredictCollisions { time_bound } => Ok(Report::Collisions {
                predictions: self.predict_collisions(time_bound)?,
            }),
        }
    }
}

impl Default for TrackingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

