//! Integration tests for the monitoring loop and record store
//!
//! These tests verify that:
//! - Record counts match floor(duration * 60 / interval)
//! - Generation, append and notification happen in strict order
//! - The header is written once per store, no matter how many runs
//! - Invalid settings and store failures leave prior data untouched
//!
//! Pacers here record the requested waits instead of sleeping.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::TempDir;
use vitalwatch::core::monitor::Monitor;
use vitalwatch::core::pacer::{PauseOutcome, Pacer};
use vitalwatch::core::sampler::{SimulatedSensors, VitalsSource};
use vitalwatch::core::store::{RecordStore, HEADER};
use vitalwatch::domain::{VitalSigns, VitalwatchError};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Sampled,
    Logged(String),
    Paused(Duration),
}

type EventLog = Rc<RefCell<Vec<Event>>>;

struct TracingSource {
    inner: SimulatedSensors,
    events: EventLog,
}

impl VitalsSource for TracingSource {
    fn sample(&mut self) -> VitalSigns {
        self.events.borrow_mut().push(Event::Sampled);
        self.inner.sample()
    }
}

struct TracingPacer {
    events: EventLog,
}

impl Pacer for TracingPacer {
    fn pause(&mut self, interval: Duration) -> PauseOutcome {
        self.events.borrow_mut().push(Event::Paused(interval));
        PauseOutcome::Elapsed
    }
}

fn tracing_monitor(store: RecordStore, events: &EventLog) -> Monitor<TracingSource, TracingPacer> {
    Monitor::with_parts(
        TracingSource {
            inner: SimulatedSensors::with_seed(2024),
            events: events.clone(),
        },
        store,
        TracingPacer {
            events: events.clone(),
        },
    )
}

fn store_lines(store: &RecordStore) -> Vec<String> {
    std::fs::read_to_string(store.path())
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn header_line() -> String {
    HEADER.join(",")
}

#[test]
fn test_scenario_a_ten_second_interval_for_one_minute() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("health_data.csv")).with_sync(false);
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store.clone(), &events);

    let log = events.clone();
    let summary = monitor
        .run(10, 1, |line| log.borrow_mut().push(Event::Logged(line)))
        .unwrap();

    assert_eq!(summary.cycles_planned, 6);
    assert_eq!(summary.records_written, 6);
    assert!(summary.is_complete());

    // Sampled, Logged, Paused repeated; no pause after the last cycle
    let events = events.borrow();
    assert_eq!(events.len(), 6 * 3 - 1);
    for (cycle, chunk) in events.chunks(3).enumerate() {
        assert_eq!(chunk[0], Event::Sampled, "cycle {cycle}");
        assert!(matches!(chunk[1], Event::Logged(_)), "cycle {cycle}");
        if chunk.len() == 3 {
            assert_eq!(chunk[2], Event::Paused(Duration::from_secs(10)));
        }
    }

    let lines = store_lines(&store);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], header_line());
}

#[test]
fn test_scenario_b_interval_longer_than_duration() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("health_data.csv"));
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store.clone(), &events);
    let mut calls = 0;

    let summary = monitor.run(120, 1, |_| calls += 1).unwrap();

    assert_eq!(summary.records_written, 0);
    assert!(summary.is_complete());
    assert_eq!(calls, 0);
    assert!(events.borrow().is_empty());
    assert!(!store.path().exists());
}

#[test]
fn test_scenario_c_invalid_settings_leave_store_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("health_data.csv");
    std::fs::write(&path, "existing contents\n").unwrap();
    let store = RecordStore::new(&path);
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store, &events);

    for (interval, duration) in [(0, 1), (10, -1), (-10, 5), (10, 0)] {
        let err = monitor.run(interval, duration, |_| {}).unwrap_err();
        assert!(
            matches!(err, VitalwatchError::InvalidConfiguration(_)),
            "({interval}, {duration})"
        );
    }

    assert!(events.borrow().is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing contents\n");
}

#[test]
fn test_scenario_d_fresh_store_gets_header_then_row() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("fresh.csv"));
    assert!(!store.path().exists());

    let mut monitor = Monitor::with_parts(
        SimulatedSensors::with_seed(9),
        store.clone(),
        TracingPacer {
            events: Rc::new(RefCell::new(Vec::new())),
        },
    );
    let summary = monitor.run(60, 1, |_| {}).unwrap();
    assert_eq!(summary.records_written, 1);

    let lines = store_lines(&store);
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Timestamp,Heart Rate (bpm),Blood Pressure Systolic (mmHg),Blood Pressure Diastolic (mmHg),Temperature (°C)"
    );
    assert_eq!(lines[1].split(',').count(), 5);
}

#[test]
fn test_record_count_matches_cycle_formula() {
    for (interval, duration) in [(1, 1), (7, 1), (13, 2), (59, 1), (61, 1), (45, 3), (300, 4)] {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::new(dir.path().join("health_data.csv")).with_sync(false);
        let events: EventLog = Rc::new(RefCell::new(Vec::new()));
        let mut monitor = tracing_monitor(store.clone(), &events);
        let mut calls = 0u64;

        let summary = monitor.run(interval, duration, |_| calls += 1).unwrap();

        let expected = (duration * 60 / interval) as u64;
        assert_eq!(summary.records_written, expected, "({interval}, {duration})");
        assert_eq!(calls, expected);
        let data_rows = store_lines(&store).len().saturating_sub(1) as u64;
        assert_eq!(data_rows, expected);
    }
}

#[test]
fn test_each_line_is_durable_before_notification() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("health_data.csv"));
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store.clone(), &events);
    let mut seen = Vec::new();

    monitor
        .run(15, 1, |line| {
            let lines = store_lines(&store);
            // Header plus every row delivered so far, including this one
            assert_eq!(lines.len(), seen.len() + 2);
            let timestamp = lines.last().unwrap().split(',').next().unwrap().to_string();
            assert!(line.starts_with(&format!("Data logged at {timestamp}: ")));
            seen.push(line);
        })
        .unwrap();

    assert_eq!(seen.len(), 4);
}

#[test]
fn test_header_written_once_across_runs() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("health_data.csv")).with_sync(false);
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));

    for _ in 0..3 {
        let mut monitor = tracing_monitor(store.clone(), &events);
        monitor.run(20, 1, |_| {}).unwrap();
    }

    let lines = store_lines(&store);
    assert_eq!(lines.len(), 1 + 3 * 3);
    assert_eq!(lines[0], header_line());
    assert_eq!(lines.iter().filter(|l| **l == header_line()).count(), 1);

    let stats = store.inspect().unwrap();
    assert!(stats.has_header);
    assert_eq!(stats.records, 9);
}

#[test]
fn test_written_rows_stay_within_ranges() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path().join("health_data.csv")).with_sync(false);
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store.clone(), &events);

    monitor.run(1, 5, |_| {}).unwrap();

    let lines = store_lines(&store);
    assert_eq!(lines.len(), 301);
    for row in &lines[1..] {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 5);
        let heart_rate: u16 = fields[1].parse().unwrap();
        let systolic: u16 = fields[2].parse().unwrap();
        let diastolic: u16 = fields[3].parse().unwrap();
        let temperature: f64 = fields[4].parse().unwrap();

        assert!((60..=100).contains(&heart_rate), "{row}");
        assert!((90..=140).contains(&systolic), "{row}");
        assert!((60..=90).contains(&diastolic), "{row}");
        assert!((36.5..=37.5).contains(&temperature), "{row}");
        assert_eq!(fields[4].split('.').nth(1).map(str::len), Some(1), "{row}");
    }
}

#[test]
fn test_store_failure_halts_run_and_keeps_prior_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("health_data.csv");
    let store = RecordStore::new(&path);
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = tracing_monitor(store.clone(), &events);
    let mut calls = 0;

    // Swap the file for a directory after the second row so the third append fails
    let swap_path = path.clone();
    let err = monitor
        .run(10, 1, |_| {
            calls += 1;
            if calls == 2 {
                let kept = std::fs::read_to_string(&swap_path).unwrap();
                std::fs::remove_file(&swap_path).unwrap();
                std::fs::create_dir(&swap_path).unwrap();
                std::fs::write(swap_path.with_extension("kept"), kept).unwrap();
            }
        })
        .unwrap_err();

    assert!(matches!(err, VitalwatchError::StoreWrite { .. }));
    assert_eq!(calls, 2);

    let kept = std::fs::read_to_string(path.with_extension("kept")).unwrap();
    assert_eq!(kept.lines().count(), 3);
    let sampled = events
        .borrow()
        .iter()
        .filter(|e| **e == Event::Sampled)
        .count();
    assert_eq!(sampled, 3);
}
