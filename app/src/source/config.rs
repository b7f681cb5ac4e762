use infrastructure::HttpClientConfig;
use serde::Deserialize;

use super::{Constant, LinearRamp, MeasurementSource, RandomInRange, Sinusoidal, WeatherLookup, linear_ramp};

/// Base source selection as read from configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    Constant {
        value: f64,
    },
    LinearRamp {
        start: f64,
        #[serde(default = "default_step")]
        step: f64,
    },
    Random {
        min: f64,
        max: f64,
        seed: Option<u64>,
    },
    Sinusoidal {
        amplitude: f64,
        frequency: f64,
        #[serde(default)]
        phase: f64,
    },
    Weather {
        latitude: f64,
        longitude: f64,
        base_url: Option<String>,
    },
}

fn default_step() -> f64 {
    linear_ramp::DEFAULT_STEP
}

impl SourceConfig {
    pub fn build(&self, http: &HttpClientConfig) -> anyhow::Result<Box<dyn MeasurementSource>> {
        let source: Box<dyn MeasurementSource> = match self {
            SourceConfig::Constant { value } => Box::new(Constant::new(*value)),
            SourceConfig::LinearRamp { start, step } => Box::new(LinearRamp::with_step(*start, *step)),
            SourceConfig::Random { min, max, seed: Some(seed) } => Box::new(RandomInRange::seeded(*min, *max, *seed)),
            SourceConfig::Random { min, max, seed: None } => Box::new(RandomInRange::new(*min, *max)),
            SourceConfig::Sinusoidal {
                amplitude,
                frequency,
                phase,
            } => Box::new(Sinusoidal::new(*amplitude, *frequency, *phase)),
            SourceConfig::Weather {
                latitude,
                longitude,
                base_url: Some(base_url),
            } => Box::new(WeatherLookup::with_base_url(base_url, *latitude, *longitude, http)?),
            SourceConfig::Weather {
                latitude,
                longitude,
                base_url: None,
            } => Box::new(WeatherLookup::new(*latitude, *longitude, http)?),
        };

        tracing::debug!("Built measurement source {:?}", self);
        Ok(source)
    }
}
