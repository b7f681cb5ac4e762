use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MeasurementSource;
use crate::core::Temperature;

/// Samples uniformly from `[min, max)`.
///
/// The range is not validated. An empty or inverted range falls back to `min + u * (max - min)`
/// with `u` in `[0, 1)`, so `min == max` always yields `min` and `min > max` yields values in
/// `(max, min]`.
#[derive(Debug, Clone)]
pub struct RandomInRange<R: Rng = StdRng> {
    min: f64,
    max: f64,
    rng: R,
}

impl RandomInRange<StdRng> {
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    pub fn seeded(min: f64, max: f64, seed: u64) -> Self {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomInRange<R> {
    pub fn with_rng(min: f64, max: f64, rng: R) -> Self {
        Self { min, max, rng }
    }
}

impl<R: Rng> MeasurementSource for RandomInRange<R> {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        if self.min < self.max {
            return Ok(Temperature(self.rng.random_range(self.min..self.max)));
        }

        let u: f64 = self.rng.random();
        Ok(Temperature(self.min + u * (self.max - self.min)))
    }
}
