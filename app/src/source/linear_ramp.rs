use super::MeasurementSource;
use crate::core::Temperature;

pub const DEFAULT_STEP: f64 = 0.5;

/// Climbs by `step` on every read. The first read already returns `start + step`.
#[derive(Debug, Clone)]
pub struct LinearRamp {
    current: Temperature,
    step: f64,
}

impl LinearRamp {
    pub fn new(start: impl Into<Temperature>) -> Self {
        Self::with_step(start, DEFAULT_STEP)
    }

    pub fn with_step(start: impl Into<Temperature>, step: f64) -> Self {
        Self {
            current: start.into(),
            step,
        }
    }
}

impl MeasurementSource for LinearRamp {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        self.current += self.step;
        Ok(self.current)
    }
}
