//! Tracking engine for airtrack.
//!
//! Owns the track store and the draft being composed, dispatches
//! `TrackCommand`s to the transform, proximity and collision systems,
//! and produces `TrackingSnapshot`s for the presentation layer.
//! Completely headless and deterministic.

pub mod engine;
pub mod scenario;
pub mod store;
pub mod systems;

pub use airtrack_core as core;
pub use engine::{EngineConfig, TrackingEngine};
pub use store::TrackStore;
