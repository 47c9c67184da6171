//! Core monitoring logic for Vitalwatch.
//!
//! # Modules
//!
//! - [`sampler`] - Simulated heart rate, blood pressure and temperature sensors
//! - [`store`] - Append-only CSV record store
//! - [`monitor`] - The counted sample, write, notify, wait loop
//! - [`pacer`] - Wait primitives between cycles
//! - [`summary`] - Per-run summary
//! - [`session`] - Front-end state and worker hand-off for interactive shells
//!
//! # Example
//!
//! ```rust,no_run
//! use vitalwatch::core::monitor::Monitor;
//! use vitalwatch::core::store::RecordStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut monitor = Monitor::new(RecordStore::new("health_data.csv"));
//!
//! // Six cycles, ten seconds apart; blocks for about fifty seconds
//! let summary = monitor.run(10, 1, |line| println!("{line}"))?;
//!
//! println!("Records written: {}", summary.records_written);
//! # Ok(())
//! # }
//! ```

pub mod monitor;
pub mod pacer;
pub mod sampler;
pub mod session;
pub mod store;
pub mod summary;
