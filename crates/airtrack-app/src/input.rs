//! Text command parsing for interactive use.
//!
//! Numeric arguments follow the form-input contract: anything that does
//! not parse to a finite number becomes 0.

use airtrack_engine::core::commands::TrackCommand;
use airtrack_engine::core::enums::{DraftField, EntryMode};
use airtrack_engine::core::types::Position;

use crate::error::{AppError, AppResult};
use crate::state::ConsoleRequest;

/// Parse a user-typed number, defaulting to 0.
pub fn parse_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a track id; unparseable ids become 0, which never names a track.
fn parse_id(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

fn parse_field(text: &str) -> Option<DraftField> {
    match text.to_ascii_lowercase().as_str() {
        "x" => Some(DraftField::X),
        "y" => Some(DraftField::Y),
        "r" => Some(DraftField::R),
        "a" => Some(DraftField::A),
        "v" => Some(DraftField::V),
        "d" => Some(DraftField::D),
        _ => None,
    }
}

/// Parse one whitespace-separated text command.
///
/// ```text
/// mode cartesian|polar      set <x|y|r|a|v|d> <value>   insert
/// toggle <id>               delete
/// translate <dx> <dy>       scale <sx> <sy>             rotate <angle> [<cx> <cy>]
/// near-origin <distance>    near-pairs <distance>       collisions <seconds>
/// show                      quit
/// ```
pub fn parse_text_command(line: &str) -> AppResult<ConsoleRequest> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let arg = |i: usize| words.get(i).copied().unwrap_or("");
    let num = |i: usize| parse_or_zero(arg(i));
    let unknown = || AppError::UnknownCommand(line.trim().to_string());

    let command = match arg(0).to_ascii_lowercase().as_str() {
        "show" => return Ok(ConsoleRequest::Snapshot),
        "quit" | "exit" => return Ok(ConsoleRequest::Quit),
        "mode" => match arg(1).to_ascii_lowercase().as_str() {
            "cartesian" => TrackCommand::SetEntryMode {
                mode: EntryMode::Cartesian,
            },
            "polar" => TrackCommand::SetEntryMode {
                mode: EntryMode::Polar,
            },
            _ => return Err(unknown()),
        },
        "set" => TrackCommand::EditDraft {
            field: parse_field(arg(1)).ok_or_else(unknown)?,
            value: num(2),
        },
        "insert" => TrackCommand::InsertDraft,
        "toggle" => TrackCommand::ToggleSelection { id: parse_id(arg(1)) },
        "delete" => TrackCommand::DeleteSelected,
        "translate" => TrackCommand::Translate {
            dx: num(1),
            dy: num(2),
        },
        "scale" => TrackCommand::Scale {
            sx: num(1),
            sy: num(2),
        },
        "rotate" => TrackCommand::Rotate {
            angle: num(1),
            center: Position::new(num(2), num(3)),
        },
        "near-origin" => TrackCommand::NearOrigin { threshold: num(1) },
        "near-pairs" => TrackCommand::NearEachOther { threshold: num(1) },
        "collisions" => TrackCommand::PredictCollisions { time_bound: num(1) },
        _ => return Err(unknown()),
    };
    Ok(ConsoleRequest::Command(command))
}
