//! Health record domain model
//!
//! A [`HealthRecord`] is one timestamped set of simulated vital-sign readings.
//! Records are built once per monitoring cycle, serialized to the store, and
//! then dropped.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Timestamp layout used in the store and in summary lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Heart rate range in beats per minute
pub const HEART_RATE_RANGE: RangeInclusive<u16> = 60..=100;

/// Systolic blood pressure range in mmHg
pub const SYSTOLIC_RANGE: RangeInclusive<u16> = 90..=140;

/// Diastolic blood pressure range in mmHg
pub const DIASTOLIC_RANGE: RangeInclusive<u16> = 60..=90;

/// Body temperature range in degrees Celsius
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 36.5..=37.5;

/// One reading of the three simulated sensors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Heart rate (bpm)
    pub heart_rate: u16,

    /// Systolic blood pressure (mmHg)
    pub systolic: u16,

    /// Diastolic blood pressure (mmHg)
    pub diastolic: u16,

    /// Body temperature (°C), one fractional digit
    pub temperature: f64,
}

impl VitalSigns {
    /// Creates a reading, rounding the temperature to one decimal place
    pub fn new(heart_rate: u16, systolic: u16, diastolic: u16, temperature: f64) -> Self {
        Self {
            heart_rate,
            systolic,
            diastolic,
            temperature: round_to_tenth(temperature),
        }
    }

    /// Returns true when every field lies inside its documented range
    pub fn is_within_ranges(&self) -> bool {
        HEART_RATE_RANGE.contains(&self.heart_rate)
            && SYSTOLIC_RANGE.contains(&self.systolic)
            && DIASTOLIC_RANGE.contains(&self.diastolic)
            && TEMPERATURE_RANGE.contains(&self.temperature)
            && round_to_tenth(self.temperature) == self.temperature
    }

    /// Temperature rendered with exactly one fractional digit
    pub fn temperature_display(&self) -> String {
        format!("{:.1}", self.temperature)
    }
}

/// Rounds a value to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A timestamped vital-signs record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    timestamp: NaiveDateTime,
    vitals: VitalSigns,
}

impl HealthRecord {
    /// Creates a record, truncating the timestamp to whole seconds
    pub fn new(timestamp: NaiveDateTime, vitals: VitalSigns) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(0),
            vitals,
        }
    }

    /// Creates a record stamped with the current local time
    pub fn now(vitals: VitalSigns) -> Self {
        Self::new(Local::now().naive_local(), vitals)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn vitals(&self) -> &VitalSigns {
        &self.vitals
    }

    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Column values in store order: timestamp, heart rate, systolic, diastolic, temperature
    pub fn csv_fields(&self) -> [String; 5] {
        [
            self.formatted_timestamp(),
            self.vitals.heart_rate.to_string(),
            self.vitals.systolic.to_string(),
            self.vitals.diastolic.to_string(),
            self.vitals.temperature_display(),
        ]
    }

    /// Human-readable one-line rendering shown in the log view
    pub fn summary_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Data logged at {}: Heart Rate={} bpm, BP={}/{} mmHg, Temp={} °C",
            self.formatted_timestamp(),
            self.vitals.heart_rate,
            self.vitals.systolic,
            self.vitals.diastolic,
            self.vitals.temperature_display()
        )
    }
}
