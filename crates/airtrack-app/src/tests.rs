//! Tests for input parsing, configuration, request handling and the console loop.

use std::path::Path;

use airtrack_engine::core::commands::TrackCommand;
use airtrack_engine::core::enums::{DraftField, EntryMode, ScenarioId};
use airtrack_engine::core::types::Position;
use airtrack_engine::EngineConfig;

use crate::config::AppConfig;
use crate::console;
use crate::error::AppError;
use crate::input::{parse_or_zero, parse_text_command};
use crate::state::{AppState, ConsoleRequest, ConsoleResponse};

// ---- Input ----

#[test]
fn test_parse_or_zero() {
    assert_eq!(parse_or_zero("12.5"), 12.5);
    assert_eq!(parse_or_zero(" -3 "), -3.0);
    assert_eq!(parse_or_zero("abc"), 0.0);
    assert_eq!(parse_or_zero(""), 0.0);
    assert_eq!(parse_or_zero("NaN"), 0.0);
    assert_eq!(parse_or_zero("inf"), 0.0);
}

#[test]
fn test_parse_text_commands() {
    assert_eq!(
        parse_text_command("translate 1 -2").unwrap(),
        ConsoleRequest::Command(TrackCommand::Translate { dx: 1.0, dy: -2.0 })
    );
    assert_eq!(
        parse_text_command("rotate 90").unwrap(),
        ConsoleRequest::Command(TrackCommand::Rotate {
            angle: 90.0,
            center: Position::ORIGIN
        })
    );
    assert_eq!(
        parse_text_command("SET a 45").unwrap(),
        ConsoleRequest::Command(TrackCommand::EditDraft {
            field: DraftField::A,
            value: 45.0
        })
    );
    assert_eq!(
        parse_text_command("mode polar").unwrap(),
        ConsoleRequest::Command(TrackCommand::SetEntryMode {
            mode: EntryMode::Polar
        })
    );
    assert_eq!(
        parse_text_command("collisions soon").unwrap(),
        ConsoleRequest::Command(TrackCommand::PredictCollisions { time_bound: 0.0 })
    );
    assert_eq!(
        parse_text_command("toggle x").unwrap(),
        ConsoleRequest::Command(TrackCommand::ToggleSelection { id: 0 })
    );
    assert_eq!(parse_text_command("show").unwrap(), ConsoleRequest::Snapshot);
    assert_eq!(parse_text_command("quit").unwrap(), ConsoleRequest::Quit);
}

#[test]
fn test_parse_text_rejects_unknown() {
    assert!(matches!(
        parse_text_command("launch 3"),
        Err(AppError::UnknownCommand(_))
    ));
    assert!(matches!(
        parse_text_command("set q 1"),
        Err(AppError::UnknownCommand(_))
    ));
    assert!(matches!(
        parse_text_command("mode spherical"),
        Err(AppError::UnknownCommand(_))
    ));
}

#[test]
fn test_parse_json_requests() {
    assert_eq!(
        console::parse_line(r#"{"type":"NearOrigin","threshold":3.0}"#).unwrap(),
        ConsoleRequest::Command(TrackCommand::NearOrigin { threshold: 3.0 })
    );
    assert_eq!(
        console::parse_line(r#"  {"type":"Snapshot"}"#).unwrap(),
        ConsoleRequest::Snapshot
    );
    assert!(matches!(
        console::parse_line(r#"{"type":"Explode"}"#),
        Err(AppError::Json(_))
    ));
}

// ---- Config ----

#[test]
fn test_config_defaults_for_missing_keys() {
    let config = AppConfig::from_json(r#"{"pretty":true}"#).unwrap();
    assert!(config.pretty);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.engine, EngineConfig::default());

    let config = AppConfig::from_json(
        r#"{"engine":{"scenario":{"kind":"RandomTraffic","count":5},"seed":9}}"#,
    )
    .unwrap();
    assert_eq!(config.engine.scenario, ScenarioId::RandomTraffic { count: 5 });
    assert_eq!(config.engine.seed, 9);
}

#[test]
fn test_config_missing_file() {
    let err = AppConfig::load(Path::new("/nonexistent/airtrack.json")).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

// ---- Request handling ----

#[test]
fn test_state_handles_commands_and_errors() {
    let state = AppState::default();
    let response = state
        .handle(ConsoleRequest::Command(TrackCommand::NearOrigin {
            threshold: 5.0,
        }))
        .unwrap();
    assert!(response.ok);
    assert_eq!(response.message, "2 track(s) near the airport");

    let err = state
        .handle(ConsoleRequest::Command(TrackCommand::EditDraft {
            field: DraftField::R,
            value: 1.0,
        }))
        .unwrap_err();
    assert!(matches!(err, AppError::Core(_)));

    let snapshot = state.handle(ConsoleRequest::Snapshot).unwrap();
    let snap = snapshot.snapshot.unwrap();
    assert_eq!(snap.selected_ids, vec![1, 5]);
    assert_eq!(snap.report, "2 track(s) near the airport");
}

#[test]
fn test_concurrent_inserts_get_unique_ids() {
    let state = AppState::new(EngineConfig {
        scenario: ScenarioId::Empty,
        ..Default::default()
    });
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..5 {
                    state
                        .handle(ConsoleRequest::Command(TrackCommand::InsertDraft))
                        .unwrap();
                }
            });
        }
    });
    let snap = state.handle(ConsoleRequest::Snapshot).unwrap().snapshot.unwrap();
    let ids: Vec<u32> = snap.tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
}

// ---- Console loop ----

#[test_log::test]
fn test_console_session() {
    let state = AppState::default();
    let input = "toggle 1\n\
                 \n\
                 translate 1 1\n\
                 bogus\n\
                 {\"type\":\"PredictCollisions\",\"time_bound\":0}\n\
                 quit\n\
                 delete\n";
    let mut output = Vec::new();
    console::run(&state, input.as_bytes(), &mut output, false).unwrap();

    let text = String::from_utf8(output).unwrap();
    let responses: Vec<ConsoleResponse> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // blank line skipped, nothing after quit
    assert_eq!(responses.len(), 5);
    assert_eq!(responses[0].message, "Track 1 selected");
    assert_eq!(
        responses[1].message,
        "Translated 1 selected track(s) by (1, 1)"
    );
    assert!(!responses[2].ok);
    assert_eq!(responses[2].message, "unrecognized command: bogus");
    assert_eq!(
        responses[3].message,
        "No collision detected within the specified time."
    );
    let snap = responses[4].snapshot.as_ref().unwrap();
    assert_eq!(snap.tracks.len(), 5, "delete after quit must not run");
}
