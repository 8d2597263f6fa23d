//! Fire-alarm bookkeeping.

use lift_core::SimTime;

/// Tracks whether fire mode is on and how long it has been on in total.
///
/// Both transitions are idempotent: triggering an active alarm or clearing
/// an inactive one changes nothing and returns `false`.
#[derive(Debug, Clone, Default)]
pub struct FireAlarm {
    active_since: Option<SimTime>,
    /// Completed alarms (counted when cleared).
    pub count: u32,
    /// Simulated seconds spent in completed alarms.
    pub total_duration: f64,
}

impl FireAlarm {
    pub fn is_active(&self) -> bool {
        self.active_since.is_some()
    }

    pub fn trigger(&mut self, now: SimTime) -> bool {
        if self.is_active() {
            return false;
        }
        self.active_since = Some(now);
        true
    }

    pub fn clear(&mut self, now: SimTime) -> bool {
        let Some(since) = self.active_since.take() else {
            return false;
        };
        self.count += 1;
        self.total_duration += now.since(since);
        true
    }

    /// Completed duration plus the running alarm, if any.
    pub fn duration_at(&self, now: SimTime) -> f64 {
        self.total_duration + self.active_since.map_or(0.0, |s| now.since(s))
    }
}
