//! lobby — morning rush in a 12-floor office tower.
//!
//! Replays an embedded scenario (or one given on the command line) against a
//! four-car bank at 10× speed, writes per-tick CSV output, waits until the
//! building is quiet, then stops and prints the report.
//!
//! ```text
//! cargo run -p lobby --release                       # embedded scenario
//! cargo run -p lobby --release -- rush.csv min_idle  # file + strategy
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};

use lift_core::BuildingConfig;
use lift_dispatch::Strategy;
use lift_output::{CsvWriter, SnapshotObserver};
use lift_scenario::{load_csv, load_json, load_json_reader, Timeline};
use lift_sim::{SimBuilder, SimError};

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOORS:     u32 = 12;
const CARS:       u32 = 4;
const SEED:       u64 = 42;
const SPEED:      f64 = 10.0;
const OUTPUT_DIR: &str = "output/lobby";
/// Give up after this much wall-clock time.
const WALL_LIMIT: Duration = Duration::from_secs(120);

// Arrivals at the lobby, a few inter-floor trips, and one fire drill.
const SCENARIO_JSON: &str = r#"[
    {"time": 0,   "action": "spawn", "floor": 1, "count": 6},
    {"time": 5,   "action": "spawn", "floor": 1, "count": 8},
    {"time": 12,  "action": "spawn", "floor": 1, "count": 5, "target": 12},
    {"time": 20,  "action": "spawn", "floor": 7, "count": 2, "target": 3},
    {"time": 30,  "action": "spawn", "floor": 1, "count": 10},
    {"time": 55,  "action": "fire_start"},
    {"time": 85,  "action": "fire_end"},
    {"time": 90,  "action": "spawn", "floor": 1, "count": 6},
    {"time": 100, "action": "spawn", "floor": 9, "count": 3, "target": 1}
]"#;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_scenario(path: Option<&Path>) -> Result<Timeline> {
    let Some(path) = path else {
        return Ok(load_json_reader(Cursor::new(SCENARIO_JSON))?);
    };
    let timeline = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        Some("csv") => load_csv(path),
        _ => bail!("scenario must be a .json or .csv file: {}", path.display()),
    }
    .with_context(|| format!("loading scenario {}", path.display()))?;
    Ok(timeline)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let scenario_path = args.next().map(PathBuf::from);
    let strategy: Strategy = match args.next() {
        Some(s) => s.parse()?,
        None => Strategy::MinWait,
    };

    let timeline = load_scenario(scenario_path.as_deref())?;
    let last_event = timeline.events().last().map_or(0.0, |e| e.time);

    println!("=== lobby — elevator bank simulation ===");
    println!("Floors: {FLOORS}  |  Cars: {CARS}  |  Strategy: {strategy}  |  Speed: {SPEED}x");
    println!("Scenario: {} events, last at t={last_event:.0}s", timeline.len());
    println!();

    std::fs::create_dir_all(OUTPUT_DIR).with_context(|| format!("creating {OUTPUT_DIR}"))?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let observer = SnapshotObserver::new(writer)
        .every(10)
        .report_to(Path::new(OUTPUT_DIR).join("report.json"));
    let errors = observer.error_slot();

    let engine = SimBuilder::new()
        .building(BuildingConfig::new(FLOORS, CARS)?)
        .seed(SEED)
        .strategy(strategy)
        .scenario(timeline)
        .observer(observer)
        .build()?;
    engine.set_speed(SPEED)?;
    engine.start()?;

    // Wait for the scenario to play out and the building to empty.
    let started = Instant::now();
    let report = loop {
        thread::sleep(Duration::from_millis(250));
        let snap = engine.snapshot();
        if snap.sim_time > last_event && snap.people == 0 && !snap.fire_active {
            match engine.stop() {
                Ok(report) => break report,
                Err(SimError::NotAtRest { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
        if started.elapsed() > WALL_LIMIT {
            bail!("building did not settle within {WALL_LIMIT:?} (t={:.1}s)", snap.sim_time);
        }
    };

    if let Some(e) = errors.take() {
        tracing::error!(error = %e, "output writer failed");
    }

    println!("Simulated time:    {:.1} s", report.sim_time);
    println!("Transported:       {}", report.total_transported);
    println!("Average wait:      {:.1} s", report.average_wait);
    println!("Fire alarms:       {} ({:.1} s total)", report.fire_alarms, report.fire_duration);
    println!();
    println!("{:<6} {:>6} {:>12} {:>12} {:>11}", "car", "trips", "empty trips", "transported", "idle share");
    for car in &report.elevators {
        println!(
            "{:<6} {:>6} {:>12} {:>12} {:>10.0}%",
            car.id.0,
            car.trips,
            car.empty_trips,
            car.transported,
            car.idle_share * 100.0
        );
    }
    println!();
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}
