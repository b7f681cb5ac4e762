use super::MeasurementSource;
use crate::core::Temperature;

#[derive(Debug, Clone)]
pub struct Constant {
    value: Temperature,
}

impl Constant {
    pub fn new(value: impl Into<Temperature>) -> Self {
        Self { value: value.into() }
    }
}

impl MeasurementSource for Constant {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        Ok(self.value)
    }
}
