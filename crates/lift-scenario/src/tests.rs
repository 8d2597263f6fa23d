//! Unit tests for lift-scenario.

use crate::{ScenarioAction, ScenarioEvent, ScenarioRecord, Timeline};

// ── Timeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use super::*;

    #[test]
    fn sorts_stably_by_time() {
        let t = Timeline::new(vec![
            ScenarioEvent::fire_end(30.0),
            ScenarioEvent::spawn(5.0, 2, 1),
            ScenarioEvent::fire_start(5.0),
            ScenarioEvent::spawn(0.0, 1, 1),
        ]);
        let names: Vec<&str> = t.events().iter().map(|e| e.action.name()).collect();
        assert_eq!(names, ["spawn", "spawn", "fire_start", "fire_end"]);
        assert_eq!(t.events()[1].time, 5.0);
    }

    #[test]
    fn drain_due_fires_each_event_once() {
        let mut t = Timeline::new(vec![
            ScenarioEvent::spawn(1.0, 2, 1),
            ScenarioEvent::spawn(2.0, 3, 1),
            ScenarioEvent::fire_start(10.0),
        ]);
        assert!(t.drain_due(0.5).is_empty());
        assert_eq!(t.drain_due(2.0).len(), 2);
        assert!(t.drain_due(2.0).is_empty());
        assert!(t.drain_due(9.9).is_empty());
        assert_eq!(t.drain_due(100.0).len(), 1);
        assert!(t.drain_due(f64::MAX).is_empty());
    }

    #[test]
    fn reset_replays() {
        let mut t = Timeline::new(vec![ScenarioEvent::fire_start(0.0)]);
        assert_eq!(t.drain_due(0.0).len(), 1);
        t.reset();
        assert_eq!(t.drain_due(0.0).len(), 1);
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod record {
    use super::*;

    #[test]
    fn defaults_apply() {
        let rec = ScenarioRecord { action: "spawn".into(), ..ScenarioRecord::default() };
        let ev = rec.into_event(0).unwrap();
        assert_eq!(ev.time, 0.0);
        assert_eq!(ev.action, ScenarioAction::Spawn { floor: 1, count: 1, target: None });
    }

    #[test]
    fn unknown_action_is_kept() {
        let rec = ScenarioRecord { action: "earthquake".into(), ..ScenarioRecord::default() };
        let ev = rec.into_event(0).unwrap();
        assert_eq!(ev.action, ScenarioAction::Unknown("earthquake".into()));
    }

    #[test]
    fn negative_time_rejected() {
        let rec = ScenarioRecord {
            time:   Some(-1.0),
            action: "fire_start".into(),
            ..ScenarioRecord::default()
        };
        assert!(rec.into_event(4).is_err());
    }

    #[test]
    fn from_event_keeps_spawn_fields() {
        let rec = ScenarioRecord::from(&ScenarioEvent::spawn_to(3.0, 5, 2, 9));
        assert_eq!(rec.action, "spawn");
        assert_eq!((rec.floor, rec.count, rec.target), (Some(5), Some(2), Some(9)));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_csv, load_csv_reader, load_json_reader, ScenarioError};

    const JSON: &str = r#"[
        {"time": 20, "action": "fire_start"},
        {"action": "spawn", "floor": 5, "count": 3},
        {"time": 12.5, "action": "spawn", "floor": 2, "target": 8},
        {"time": 45, "action": "fire_end"}
    ]"#;

    const CSV: &str = "\
time,action,floor,count,target
20,fire_start,,,
0,spawn,5,3,
12.5,spawn,2,,8
45,fire_end,,,
";

    fn expected() -> Vec<ScenarioEvent> {
        vec![
            ScenarioEvent::spawn(0.0, 5, 3),
            ScenarioEvent::spawn_to(12.5, 2, 1, 8),
            ScenarioEvent::fire_start(20.0),
            ScenarioEvent::fire_end(45.0),
        ]
    }

    #[test]
    fn json_loads_sorted_with_defaults() {
        let t = load_json_reader(Cursor::new(JSON)).unwrap();
        assert_eq!(t.events(), expected().as_slice());
    }

    #[test]
    fn csv_loads_sorted_with_defaults() {
        let t = load_csv_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(t.events(), expected().as_slice());
    }

    #[test]
    fn csv_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("scenario.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(CSV.as_bytes()).unwrap();
        drop(f);
        assert_eq!(load_csv(&path).unwrap().len(), 4);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = load_json_reader(Cursor::new("[{\"time\": 1}]"));
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn malformed_csv_is_parse_error() {
        let bad = "time,action,floor,count,target\nsoon,spawn,1,1,\n";
        let result = load_csv_reader(Cursor::new(bad));
        assert!(matches!(result, Err(ScenarioError::Parse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_csv(std::path::Path::new("/nonexistent/scenario.csv"));
        assert!(matches!(result, Err(ScenarioError::Io(_))));
    }
}
