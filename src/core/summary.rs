//! Monitoring run summary and reporting

use std::time::Duration;
use uuid::Uuid;

/// Summary of one monitoring run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Identifier used to correlate log output for this run
    pub run_id: Uuid,

    /// Seconds between cycles
    pub interval_seconds: u64,

    /// Requested run length in minutes
    pub duration_minutes: u64,

    /// Number of cycles the run was configured for
    pub cycles_planned: u64,

    /// Number of records appended to the store
    pub records_written: u64,

    /// Whether a shutdown signal stopped the run early
    pub interrupted: bool,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create a new empty summary for a run
    pub fn new(interval_seconds: u64, duration_minutes: u64, cycles_planned: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            interval_seconds,
            duration_minutes,
            cycles_planned,
            records_written: 0,
            interrupted: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// True when every planned cycle wrote its record
    pub fn is_complete(&self) -> bool {
        !self.interrupted && self.records_written == self.cycles_planned
    }
}
