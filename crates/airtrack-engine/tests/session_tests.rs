//! End-to-end sessions driven through serialized commands.

use airtrack_engine::core::commands::TrackCommand;
use airtrack_engine::core::enums::ScenarioId;
use airtrack_engine::core::report::Report;
use airtrack_engine::{EngineConfig, TrackingEngine};

fn run_session(engine: &mut TrackingEngine, lines: &[&str]) -> Vec<Report> {
    lines
        .iter()
        .map(|line| {
            let command: TrackCommand = serde_json::from_str(line).unwrap();
            engine.execute(command).unwrap()
        })
        .collect()
}

/// Compose two tracks in both entry modes, then predict their head-on meeting.
#[test]
fn test_compose_and_predict_head_on() {
    let mut engine = TrackingEngine::new(EngineConfig {
        scenario: ScenarioId::Empty,
        ..Default::default()
    });

    let reports = run_session(
        &mut engine,
        &[
            r#"{"type":"EditDraft","field":"V","value":1.0}"#,
            r#"{"type":"InsertDraft"}"#,
            r#"{"type":"SetEntryMode","mode":"Polar"}"#,
            r#"{"type":"EditDraft","field":"R","value":10.0}"#,
            r#"{"type":"EditDraft","field":"V","value":1.0}"#,
            r#"{"type":"EditDraft","field":"D","value":180.0}"#,
            r#"{"type":"InsertDraft"}"#,
            r#"{"type":"PredictCollisions","time_bound":5.0}"#,
        ],
    );

    assert_eq!(reports[1], Report::TrackInserted { id: 1 });
    assert_eq!(reports[6], Report::TrackInserted { id: 2 });
    assert_eq!(
        reports[7].to_string(),
        "Tracks 1 and 2 will collide in 5.00 seconds at point (5.00, 0.00)"
    );

    let late = engine
        .execute(TrackCommand::PredictCollisions { time_bound: 4.0 })
        .unwrap();
    assert_eq!(
        late.to_string(),
        "No collision detected within the specified time."
    );
}

/// Select by query, move the selection, and confirm unselected tracks stay put.
#[test]
fn test_query_then_transform_selection() {
    let mut engine = TrackingEngine::default();
    let before = engine.snapshot();

    let reports = run_session(
        &mut engine,
        &[
            r#"{"type":"NearOrigin","threshold":5.0}"#,
            r#"{"type":"Rotate","angle":90.0,"center":{"x":0.0,"y":0.0}}"#,
            r#"{"type":"Rotate","angle":-90.0,"center":{"x":0.0,"y":0.0}}"#,
            r#"{"type":"Translate","dx":-2.0,"dy":-3.0}"#,
        ],
    );
    assert_eq!(reports[0].to_string(), "2 track(s) near the airport");
    assert!(matches!(reports[3], Report::Translated { count: 2, .. }));

    let after = engine.snapshot();
    // track 5 started at (2, 3)
    let t5 = after.tracks.iter().find(|t| t.id == 5).unwrap();
    assert_eq!((t5.x, t5.y, t5.r), (0.0, 0.0, 0.0));
    let t1 = after.tracks.iter().find(|t| t.id == 1).unwrap();
    assert_eq!((t1.x, t1.y), (1.0, 1.0));
    assert_eq!((t1.r, t1.a), (1.41, 45.0));

    for id in [2, 3, 4] {
        let old = before.tracks.iter().find(|t| t.id == id).unwrap();
        let new = after.tracks.iter().find(|t| t.id == id).unwrap();
        assert_eq!((old.x, old.y), (new.x, new.y));
    }
}

/// Pairwise query on generated traffic agrees with a brute-force distance check.
#[test]
fn test_near_pairs_on_random_traffic() {
    let mut engine = TrackingEngine::new(EngineConfig {
        scenario: ScenarioId::RandomTraffic { count: 60 },
        seed: 2024,
    });
    let tracks: Vec<_> = engine.store().iter().cloned().collect();

    let (pairs, ids) = engine.query_near_each_other(2.0).unwrap();

    let mut expected = 0;
    for (i, a) in tracks.iter().enumerate() {
        for b in &tracks[i + 1..] {
            if a.position().range_to(&b.position()) <= 2.0 {
                expected += 1;
            }
        }
    }
    assert_eq!(pairs.len(), expected);
    assert_eq!(engine.store().selected_ids(), ids);
    for pair in &pairs {
        assert!(pair.first < pair.second);
        assert!(pair.distance <= 2.0);
    }
}
