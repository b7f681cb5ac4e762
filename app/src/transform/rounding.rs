use crate::core::Temperature;
use crate::source::MeasurementSource;

/// Rounds to the nearest whole degree, halves away from zero (2.5 -> 3, -2.5 -> -3).
pub struct RoundingSource<S> {
    inner: S,
}

impl<S: MeasurementSource> RoundingSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: MeasurementSource> MeasurementSource for RoundingSource<S> {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        Ok(self.inner.read()?.round())
    }
}
