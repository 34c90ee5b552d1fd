//! Error types for the core.

use thiserror::Error;

use crate::enums::{DraftField, EntryMode};

pub type AirtrackResult<T> = std::result::Result<T, AirtrackError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AirtrackError {
    #[error("non-finite value for {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("draft field {field:?} is derived in {mode:?} entry mode")]
    DerivedField { field: DraftField, mode: EntryMode },
}

/// Reject NaN and infinities before they can reach track state.
pub fn ensure_finite(field: &'static str, value: f64) -> AirtrackResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AirtrackError::NonFinite { field, value })
    }
}
