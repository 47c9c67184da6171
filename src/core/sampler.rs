//! Simulated vital-sign sensors
//!
//! Every field is drawn independently and uniformly from its inclusive range.
//! Temperature is drawn as a real number and rounded to one decimal place.

use crate::domain::record::{
    round_to_tenth, VitalSigns, DIASTOLIC_RANGE, HEART_RATE_RANGE, SYSTOLIC_RANGE,
    TEMPERATURE_RANGE,
};
use rand::{Rng, SeedableRng};

/// Source of vital-sign readings consumed by the monitoring loop
pub trait VitalsSource {
    /// Produces one reading
    fn sample(&mut self) -> VitalSigns;
}

/// Pseudo-random sensors backed by a seedable RNG
pub struct SimulatedSensors {
    /// Random number generator (using StdRng which is Send + Sync)
    rng: rand::rngs::StdRng,
}

impl SimulatedSensors {
    /// Create sensors seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Create sensors with a fixed seed, producing a reproducible sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalsSource for SimulatedSensors {
    fn sample(&mut self) -> VitalSigns {
        draw(&mut self.rng)
    }
}

/// Generates one reading from the thread-local RNG
pub fn generate() -> VitalSigns {
    draw(&mut rand::thread_rng())
}

fn draw<R: Rng + ?Sized>(rng: &mut R) -> VitalSigns {
    let heart_rate = rng.gen_range(HEART_RATE_RANGE);
    let systolic = rng.gen_range(SYSTOLIC_RANGE);
    let diastolic = rng.gen_range(DIASTOLIC_RANGE);
    let temperature = round_to_tenth(rng.gen_range(TEMPERATURE_RANGE));

    VitalSigns {
        heart_rate,
        systolic,
        diastolic,
        temperature,
    }
}
