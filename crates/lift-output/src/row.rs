//! Plain data row types written by output backends.

use lift_sim::WorldSnapshot;

/// One car at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorSnapshotRow {
    pub tick:        u64,
    pub sim_time:    f64,
    pub elevator_id: u32,
    pub position:    f64,
    pub velocity:    f64,
    /// `up`, `down`, or `idle`.
    pub direction:   String,
    pub doors_open:  bool,
    pub passengers:  usize,
    /// Length of the car's target list.
    pub targets:     usize,
}

/// Building-wide totals for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:              u64,
    pub sim_time:          f64,
    pub fire_active:       bool,
    pub waiting:           usize,
    pub riding:            usize,
    pub total_transported: u64,
}

impl ElevatorSnapshotRow {
    pub fn from_snapshot(snap: &WorldSnapshot) -> Vec<Self> {
        snap.elevators
            .iter()
            .map(|e| Self {
                tick:        snap.tick,
                sim_time:    snap.sim_time,
                elevator_id: e.id.0,
                position:    e.position,
                velocity:    e.velocity,
                direction:   e.direction.to_string(),
                doors_open:  e.doors_open,
                passengers:  e.passengers,
                targets:     e.targets.len(),
            })
            .collect()
    }
}

impl From<&WorldSnapshot> for TickSummaryRow {
    fn from(snap: &WorldSnapshot) -> Self {
        Self {
            tick:              snap.tick,
            sim_time:          snap.sim_time,
            fire_active:       snap.fire_active,
            waiting:           snap.waiting_total(),
            riding:            snap.riding_total(),
            total_transported: snap.total_transported,
        }
    }
}
