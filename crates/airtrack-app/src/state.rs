//! Application state shared by the console and its request handling.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use airtrack_engine::core::commands::TrackCommand;
use airtrack_engine::core::report::Report;
use airtrack_engine::core::state::TrackingSnapshot;
use airtrack_engine::{EngineConfig, TrackingEngine};

use crate::error::{AppError, AppResult};

/// A console request: an engine command, or a console-level action.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleRequest {
    Command(TrackCommand),
    /// Return the current snapshot without changing anything.
    Snapshot,
    /// Stop reading input.
    Quit,
}

impl ConsoleRequest {
    /// Parse a JSON request. `{"type":"Snapshot"}` and `{"type":"Quit"}` are
    /// console actions; every other `type` must be a `TrackCommand`.
    pub fn from_json(text: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        match value.get("type").and_then(Value::as_str) {
            Some("Snapshot") => Ok(ConsoleRequest::Snapshot),
            Some("Quit") => Ok(ConsoleRequest::Quit),
            _ => Ok(ConsoleRequest::Command(serde_json::from_value(value)?)),
        }
    }
}

/// One answer line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleResponse {
    pub ok: bool,
    /// Human-readable report text, or the error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<TrackingSnapshot>,
}

impl ConsoleResponse {
    pub fn failure(error: &AppError) -> Self {
        Self {
            ok: false,
            message: error.to_string(),
            ..Default::default()
        }
    }
}

/// The engine behind a single exclusive lock: every request, reading or
/// writing, holds it for its whole duration.
pub struct AppState {
    engine: Mutex<TrackingEngine>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: Mutex::new(TrackingEngine::new(config)),
        }
    }

    /// Handle a request. `Quit` answers like `Snapshot`; stopping is the caller's job.
    pub fn handle(&self, request: ConsoleRequest) -> AppResult<ConsoleResponse> {
        let mut engine = self.engine.lock().map_err(|_| AppError::Poisoned)?;
        match request {
            ConsoleRequest::Command(command) => {
                let report = engine.execute(command)?;
                Ok(ConsoleResponse {
                    ok: true,
                    message: report.to_string(),
                    report: Some(report),
                    snapshot: None,
                })
            }
            ConsoleRequest::Snapshot | ConsoleRequest::Quit => Ok(ConsoleResponse {
                ok: true,
                message: engine.report().to_string(),
                report: None,
                snapshot: Some(engine.snapshot()),
            }),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
