use config::{Config, ConfigError, Environment, File};
use infrastructure::{HttpClientConfig, MonitoringConfig};
use serde::Deserialize;
use thermometer::core::sink::OutputConfig;
use thermometer::reactor::{HeatingControllerConfig, ThresholdAlertConfig};
use thermometer::source::SourceConfig;
use thermometer::transform::TransformConfig;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_measurements")]
    pub measurements: usize,
    pub source: SourceConfig,
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
    pub alert: ThresholdAlertConfig,
    pub heating: HeatingControllerConfig,
    #[serde(default)]
    pub http: HttpClientConfig,
}

fn default_measurements() -> usize {
    20
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config.toml"))
            .add_source(environment());

        let s = builder.build()?;
        s.try_deserialize()
    }
}

/// `THERMOMETER__MEASUREMENTS`, `THERMOMETER__HEATING__ON_THRESHOLD`, ...
fn environment() -> Environment {
    Environment::with_prefix("THERMOMETER").separator("__").try_parsing(true)
}
