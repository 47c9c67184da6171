//! Domain error types
//!
//! This module defines the error hierarchy for Vitalwatch.
//! Errors carry plain messages and don't expose third-party types.

use thiserror::Error;

/// Main Vitalwatch error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum VitalwatchError {
    /// Interval or duration is non-positive or not an integer.
    ///
    /// Raised before the monitoring loop runs, so nothing has been written.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The record store could not be opened or written
    #[error("Store write failure for {path}: {message}")]
    StoreWrite { path: String, message: String },

    /// Configuration file and logging setup errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Presentation shell misuse (e.g. starting a run while one is active)
    #[error("Session error: {0}")]
    Session(String),

    /// I/O errors outside the store write path
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl VitalwatchError {
    /// Builds a store write failure for the given path
    pub fn store_write(path: impl AsRef<std::path::Path>, message: impl std::fmt::Display) -> Self {
        VitalwatchError::StoreWrite {
            path: path.as_ref().display().to_string(),
            message: message.to_string(),
        }
    }

    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VitalwatchError::InvalidConfiguration(_) | VitalwatchError::Configuration(_) => 2,
            _ => 5,
        }
    }
}

impl From<std::io::Error> for VitalwatchError {
    fn from(err: std::io::Error) -> Self {
        VitalwatchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for VitalwatchError {
    fn from(err: serde_json::Error) -> Self {
        VitalwatchError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for VitalwatchError {
    fn from(err: csv::Error) -> Self {
        VitalwatchError::Serialization(format!("CSV error: {err}"))
    }
}

impl From<toml::de::Error> for VitalwatchError {
    fn from(err: toml::de::Error) -> Self {
        VitalwatchError::Configuration(format!("TOML parse error: {err}"))
    }
}
