//! `Timeline` — ordered scenario playback.

use crate::ScenarioEvent;

/// Scenario events sorted by time with a cursor marking what has fired.
///
/// Sorting is stable, so events sharing a timestamp fire in the order they
/// were supplied.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    events: Vec<ScenarioEvent>,
    cursor: usize,
}

impl Timeline {
    pub fn new(mut events: Vec<ScenarioEvent>) -> Self {
        events.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { events, cursor: 0 }
    }

    /// Return every not-yet-fired event with `time <= now`, advancing the
    /// cursor past them.
    pub fn drain_due(&mut self, now: f64) -> &[ScenarioEvent] {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].time <= now {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }

    /// Rewind so every event fires again.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn events(&self) -> &[ScenarioEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl From<Vec<ScenarioEvent>> for Timeline {
    fn from(events: Vec<ScenarioEvent>) -> Self {
        Self::new(events)
    }
}
