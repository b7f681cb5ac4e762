use crate::core::Temperature;
use crate::source::MeasurementSource;

/// Converts the inner Celsius value to Fahrenheit.
pub struct FahrenheitSource<S> {
    inner: S,
}

impl<S: MeasurementSource> FahrenheitSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: MeasurementSource> MeasurementSource for FahrenheitSource<S> {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        Ok(self.inner.read()?.celsius_to_fahrenheit())
    }
}
