//! Monitoring loop - the periodic sample, log, display cycle
//!
//! A run is a fixed number of cycles. Each cycle draws one reading, appends it
//! to the store, hands the summary line to the caller, then waits for the
//! configured interval. There is no wait after the final cycle.
//!
//! The loop blocks its thread for the whole run. Interactive callers should run
//! it on a worker thread (see [`crate::core::session`]).

use crate::core::pacer::{PauseOutcome, Pacer, ThreadSleepPacer};
use crate::core::sampler::{SimulatedSensors, VitalsSource};
use crate::core::store::RecordStore;
use crate::core::summary::RunSummary;
use crate::domain::errors::VitalwatchError;
use crate::domain::result::Result;
use std::time::{Duration, Instant};

/// Validated interval and duration for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorSettings {
    interval_seconds: u64,
    duration_minutes: u64,
}

impl MonitorSettings {
    /// Validate numeric settings; both must be strictly positive
    pub fn new(interval_seconds: i64, duration_minutes: i64) -> Result<Self> {
        if interval_seconds <= 0 || duration_minutes <= 0 {
            return Err(VitalwatchError::InvalidConfiguration(
                "Interval and Duration must be positive integers.".to_string(),
            ));
        }

        let duration_minutes = duration_minutes as u64;
        if duration_minutes.checked_mul(60).is_none() {
            return Err(VitalwatchError::InvalidConfiguration(format!(
                "Duration of {duration_minutes} minutes is too long"
            )));
        }

        Ok(Self {
            interval_seconds: interval_seconds as u64,
            duration_minutes,
        })
    }

    /// Validate settings typed in by an operator
    pub fn parse(interval_seconds: &str, duration_minutes: &str) -> Result<Self> {
        let interval = parse_integer("Interval", interval_seconds)?;
        let duration = parse_integer("Duration", duration_minutes)?;
        Self::new(interval, duration)
    }

    pub fn interval_seconds(&self) -> u64 {
        self.interval_seconds
    }

    pub fn duration_minutes(&self) -> u64 {
        self.duration_minutes
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    pub fn total_seconds(&self) -> u64 {
        self.duration_minutes * 60
    }

    /// Number of cycles: whole intervals that fit in the duration
    pub fn cycles(&self) -> u64 {
        self.total_seconds() / self.interval_seconds
    }
}

fn parse_integer(label: &str, input: &str) -> Result<i64> {
    input.trim().parse::<i64>().map_err(|_| {
        VitalwatchError::InvalidConfiguration(format!(
            "{label} must be a positive integer, got '{}'",
            input.trim()
        ))
    })
}

/// Runs monitoring cycles against a record store
pub struct Monitor<S = SimulatedSensors, P = ThreadSleepPacer> {
    source: S,
    store: RecordStore,
    pacer: P,
}

impl Monitor {
    /// Monitor with simulated sensors and an uninterruptible sleep
    pub fn new(store: RecordStore) -> Self {
        Self::with_parts(SimulatedSensors::new(), store, ThreadSleepPacer)
    }
}

impl<S: VitalsSource, P: Pacer> Monitor<S, P> {
    /// Monitor built from explicit collaborators
    pub fn with_parts(source: S, store: RecordStore, pacer: P) -> Self {
        Self {
            source,
            store,
            pacer,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Validate the settings, then run every cycle
    ///
    /// `on_log` is called synchronously with each summary line, before the
    /// next reading is drawn.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` before anything is written
    /// - `StoreWrite` when an append fails; earlier rows stay in the store
    pub fn run<F>(&mut self, interval_seconds: i64, duration_minutes: i64, on_log: F) -> Result<RunSummary>
    where
        F: FnMut(String),
    {
        let settings = MonitorSettings::new(interval_seconds, duration_minutes)?;
        self.run_with(&settings, on_log)
    }

    /// Run every cycle for already validated settings
    pub fn run_with<F>(&mut self, settings: &MonitorSettings, mut on_log: F) -> Result<RunSummary>
    where
        F: FnMut(String),
    {
        let start_time = Instant::now();
        let cycles = settings.cycles();
        let mut summary = RunSummary::new(
            settings.interval_seconds(),
            settings.duration_minutes(),
            cycles,
        );

        let span = tracing::info_span!("monitor_run", run_id = %summary.run_id);
        let _enter = span.enter();

        crate::log_run_start!(
            settings.interval_seconds(),
            settings.duration_minutes(),
            cycles,
            self.store.path().display()
        );

        if cycles == 0 {
            tracing::warn!(
                interval_seconds = settings.interval_seconds(),
                total_seconds = settings.total_seconds(),
                "Interval exceeds duration; no records will be produced"
            );
        }

        for cycle in 1..=cycles {
            let vitals = self.source.sample();
            let line = match self.store.append(&vitals) {
                Ok(line) => line,
                Err(e) => {
                    crate::log_error_with_context!(&e, "Monitoring run halted");
                    return Err(e);
                }
            };
            summary.records_written += 1;
            crate::log_record_written!(cycle, cycles, &vitals);

            on_log(line);

            if cycle < cycles && self.pacer.pause(settings.interval()) == PauseOutcome::Interrupted {
                tracing::info!(
                    completed = cycle,
                    planned = cycles,
                    "Monitoring interrupted between cycles"
                );
                summary.interrupted = true;
                break;
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        tracing::info!(
            records = summary.records_written,
            interrupted = summary.interrupted,
            duration_ms = summary.duration.as_millis() as u64,
            "Monitoring run finished"
        );

        Ok(summary)
    }
}
