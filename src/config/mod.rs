//! Configuration management for Vitalwatch.
//!
//! Vitalwatch reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `VITALWATCH_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [monitor]
//! interval_seconds = 10
//! duration_minutes = 1
//!
//! [store]
//! path = "health_data.csv"
//! sync_writes = true
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vitalwatch::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("vitalwatch.toml")?;
//! println!("Store: {}", config.store.path);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{ApplicationConfig, LoggingConfig, MonitorConfig, StoreConfig, VitalwatchConfig};
