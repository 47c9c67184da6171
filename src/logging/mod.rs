//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output on stderr
//! - Configurable log levels (`--log-level` or `RUST_LOG`)
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use vitalwatch::logging::init_logging;
//! use vitalwatch::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a monitoring run
///
/// # Example
///
/// ```no_run
/// use vitalwatch::log_run_start;
///
/// log_run_start!(10, 1, 6, "health_data.csv");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($interval_seconds:expr, $duration_minutes:expr, $cycles:expr, $store:expr) => {
        tracing::info!(
            interval_seconds = $interval_seconds,
            duration_minutes = $duration_minutes,
            cycles = $cycles,
            store = %$store,
            "Starting monitoring run"
        );
    };
}

/// Log one appended record
///
/// # Example
///
/// ```no_run
/// use vitalwatch::log_record_written;
/// use vitalwatch::domain::VitalSigns;
///
/// let vitals = VitalSigns::new(72, 118, 75, 36.8);
/// log_record_written!(1, 6, &vitals);
/// ```
#[macro_export]
macro_rules! log_record_written {
    ($cycle:expr, $cycles:expr, $vitals:expr) => {
        tracing::debug!(
            cycle = $cycle,
            cycles = $cycles,
            heart_rate = $vitals.heart_rate,
            systolic = $vitals.systolic,
            diastolic = $vitals.diastolic,
            temperature = $vitals.temperature,
            "Record appended"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use vitalwatch::log_error_with_context;
/// use vitalwatch::domain::VitalwatchError;
///
/// let error = VitalwatchError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
