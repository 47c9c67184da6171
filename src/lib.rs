// Vitalwatch - Simulated Vital-Signs Monitor
// Copyright (c) 2025 Vitalwatch Contributors
// Licensed under the MIT License

//! # Vitalwatch - Simulated Vital-Signs Monitor
//!
//! Vitalwatch periodically simulates heart rate, blood pressure and body
//! temperature readings, appends each one with a timestamp to a CSV store, and
//! streams a one-line summary of every reading to the operator.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Sensors, record store, monitoring loop and session
//! - [`domain`] - Health record model and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vitalwatch::core::monitor::Monitor;
//! use vitalwatch::core::store::RecordStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut monitor = Monitor::new(RecordStore::new("health_data.csv"));
//! let summary = monitor.run(10, 1, |line| println!("{line}"))?;
//! println!("Wrote {} records", summary.records_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Store Format
//!
//! ```text
//! Timestamp,Heart Rate (bpm),Blood Pressure Systolic (mmHg),Blood Pressure Diastolic (mmHg),Temperature (°C)
//! 2024-01-01 12:00:00,72,118,75,36.8
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], built on
//! [`domain::VitalwatchError`]. Invalid interval or duration values fail with
//! `InvalidConfiguration` before anything is written; store failures surface as
//! `StoreWrite` and stop the run, keeping earlier rows.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
