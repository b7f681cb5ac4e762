use serde::Deserialize;

use super::Reactor;
use crate::core::{SharedSink, Temperature};

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdAlertConfig {
    pub threshold: f64,
    pub message: String,
}

/// Emits its message for every reading at or above the threshold.
pub struct ThresholdAlert {
    threshold: Temperature,
    message: String,
    sink: SharedSink,
}

impl ThresholdAlert {
    pub fn new(threshold: impl Into<Temperature>, message: impl Into<String>, sink: SharedSink) -> Self {
        Self {
            threshold: threshold.into(),
            message: message.into(),
            sink,
        }
    }

    pub fn from_config(config: &ThresholdAlertConfig, sink: SharedSink) -> Self {
        Self::new(config.threshold, config.message.clone(), sink)
    }
}

impl Reactor for ThresholdAlert {
    fn on_reading(&mut self, value: Temperature) {
        if value >= self.threshold {
            tracing::debug!("Reading {} reached alert threshold {}", value, self.threshold);
            self.sink.emit(&self.message);
        }
    }
}
