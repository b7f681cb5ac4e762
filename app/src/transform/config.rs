use serde::Deserialize;

use crate::core::SharedSink;
use crate::source::{MeasurementSource, SourceExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformConfig {
    Log,
    Round,
    Fahrenheit,
}

impl TransformConfig {
    pub fn wrap(&self, source: Box<dyn MeasurementSource>, sink: &SharedSink) -> Box<dyn MeasurementSource> {
        match self {
            TransformConfig::Log => source.logged(sink.clone()).boxed(),
            TransformConfig::Round => source.rounded().boxed(),
            TransformConfig::Fahrenheit => source.fahrenheit().boxed(),
        }
    }

    /// Wraps `source` in each layer in turn; the first entry ends up innermost.
    pub fn wrap_all(
        transforms: &[TransformConfig],
        source: Box<dyn MeasurementSource>,
        sink: &SharedSink,
    ) -> Box<dyn MeasurementSource> {
        transforms.iter().fold(source, |source, transform| transform.wrap(source, sink))
    }
}
