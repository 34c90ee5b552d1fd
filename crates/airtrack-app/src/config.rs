//! Application configuration: an optional JSON file, overridden by CLI flags.

use std::path::Path;

use serde::{Deserialize, Serialize};

use airtrack_engine::EngineConfig;

use crate::error::{config_error, AppResult};

/// Default tracing filter when neither the config nor `RUST_LOG` set one.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Pretty-print JSON responses.
    pub pretty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: false,
        }
    }
}

impl AppConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| config_error(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
