//! Domain models and types for Vitalwatch.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Health records** ([`HealthRecord`], [`VitalSigns`]) with their value ranges
//! - **Error types** ([`VitalwatchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use vitalwatch::domain::{HealthRecord, VitalSigns};
//!
//! let vitals = VitalSigns::new(72, 118, 75, 36.8);
//! assert!(vitals.is_within_ranges());
//!
//! let record = HealthRecord::now(vitals);
//! println!("{}", record.summary_line());
//! ```

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VitalwatchError;
pub use record::{HealthRecord, VitalSigns, TIMESTAMP_FORMAT};
pub use result::Result;
