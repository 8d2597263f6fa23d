//! Scenario events and the flat record they are loaded from.

use std::fmt;

use lift_core::{Floor, GROUND_FLOOR};
use serde::{Deserialize, Serialize};

use crate::{ScenarioError, ScenarioResult};

/// What a scenario event does when its time comes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioAction {
    /// Create `count` people at `floor`.  A `target` presets where they go.
    Spawn { floor: Floor, count: u32, target: Option<Floor> },
    FireStart,
    FireEnd,
    /// An action name the simulation does not know.  Kept for logging.
    Unknown(String),
}

impl ScenarioAction {
    pub fn name(&self) -> &str {
        match self {
            ScenarioAction::Spawn { .. } => "spawn",
            ScenarioAction::FireStart    => "fire_start",
            ScenarioAction::FireEnd      => "fire_end",
            ScenarioAction::Unknown(s)   => s,
        }
    }
}

impl fmt::Display for ScenarioAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioAction::Spawn { floor, count, target: Some(t) } => {
                write!(f, "spawn {count} at floor {floor} -> {t}")
            }
            ScenarioAction::Spawn { floor, count, target: None } => {
                write!(f, "spawn {count} at floor {floor}")
            }
            other => f.write_str(other.name()),
        }
    }
}

/// One scripted event at a simulated-time offset (seconds).
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioEvent {
    pub time:   f64,
    pub action: ScenarioAction,
}

impl ScenarioEvent {
    pub fn new(time: f64, action: ScenarioAction) -> Self {
        Self { time, action }
    }

    pub fn spawn(time: f64, floor: Floor, count: u32) -> Self {
        Self::new(time, ScenarioAction::Spawn { floor, count, target: None })
    }

    pub fn spawn_to(time: f64, floor: Floor, count: u32, target: Floor) -> Self {
        Self::new(time, ScenarioAction::Spawn { floor, count, target: Some(target) })
    }

    pub fn fire_start(time: f64) -> Self {
        Self::new(time, ScenarioAction::FireStart)
    }

    pub fn fire_end(time: f64) -> Self {
        Self::new(time, ScenarioAction::FireEnd)
    }
}

// ── Flat record ───────────────────────────────────────────────────────────────

/// The on-disk shape shared by the JSON and CSV loaders.
///
/// ```json
/// {"time": 5.0, "action": "spawn", "floor": 5, "count": 3, "target": 9}
/// ```
///
/// Missing `time` means 0, missing `floor` means 1, missing `count` means 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    #[serde(default)]
    pub time:   Option<f64>,
    pub action: String,
    #[serde(default)]
    pub floor:  Option<Floor>,
    #[serde(default)]
    pub count:  Option<u32>,
    #[serde(default)]
    pub target: Option<Floor>,
}

impl ScenarioRecord {
    /// Convert to an event.  `index` is the record's position, used in errors.
    pub fn into_event(self, index: usize) -> ScenarioResult<ScenarioEvent> {
        let time = self.time.unwrap_or(0.0);
        if !time.is_finite() || time < 0.0 {
            return Err(ScenarioError::InvalidEntry {
                index,
                reason: format!("time must be a non-negative number, got {time}"),
            });
        }
        let action = match self.action.trim() {
            "spawn" => ScenarioAction::Spawn {
                floor:  self.floor.unwrap_or(GROUND_FLOOR),
                count:  self.count.unwrap_or(1),
                target: self.target,
            },
            "fire_start" => ScenarioAction::FireStart,
            "fire_end"   => ScenarioAction::FireEnd,
            other        => ScenarioAction::Unknown(other.to_owned()),
        };
        Ok(ScenarioEvent { time, action })
    }
}

impl From<&ScenarioEvent> for ScenarioRecord {
    fn from(ev: &ScenarioEvent) -> Self {
        let mut rec = ScenarioRecord {
            time:   Some(ev.time),
            action: ev.action.name().to_owned(),
            ..ScenarioRecord::default()
        };
        if let ScenarioAction::Spawn { floor, count, target } = ev.action {
            rec.floor  = Some(floor);
            rec.count  = Some(count);
            rec.target = target;
        }
        rec
    }
}
