use crate::core::{SharedSink, Temperature};
use crate::source::MeasurementSource;

pub struct LoggingSource<S> {
    inner: S,
    sink: SharedSink,
}

impl<S: MeasurementSource> LoggingSource<S> {
    pub fn new(inner: S, sink: SharedSink) -> Self {
        Self { inner, sink }
    }
}

impl<S: MeasurementSource> MeasurementSource for LoggingSource<S> {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        let value = self.inner.read()?;
        self.sink.emit(&format!("Logged temperature: {value}"));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::RecordingSink;
    use crate::source::{Constant, LinearRamp};

    struct Failing;

    impl MeasurementSource for Failing {
        fn read(&mut self) -> anyhow::Result<Temperature> {
            anyhow::bail!("sensor unplugged")
        }
    }

    #[test]
    fn test_logs_and_passes_through() {
        let sink = RecordingSink::new();
        let mut source = LoggingSource::new(Constant::new(21.0), sink.clone());

        assert_eq!(source.read().unwrap(), Temperature(21.0));
        assert_eq!(sink.lines(), vec!["Logged temperature: 21"]);
    }

    #[test]
    fn test_logs_once_per_read() {
        let sink = RecordingSink::new();
        let mut source = LoggingSource::new(LinearRamp::new(0.0), sink.clone());

        source.read().unwrap();
        source.read().unwrap();

        assert_eq!(sink.lines(), vec!["Logged temperature: 0.5", "Logged temperature: 1"]);
    }

    #[test]
    fn test_logs_unrounded_value() {
        let sink = RecordingSink::new();
        let mut source = LoggingSource::new(Constant::new(2.499), sink.clone());

        assert_eq!(source.read().unwrap(), Temperature(2.499));
        assert_eq!(sink.lines(), vec!["Logged temperature: 2.499"]);
    }

    #[test]
    fn test_inner_error_propagates_without_log() {
        let sink = RecordingSink::new();
        let mut source = LoggingSource::new(Failing, sink.clone());

        let error = source.read().unwrap_err();

        assert_eq!(error.to_string(), "sensor unplugged");
        assert!(sink.lines().is_empty());
    }
}
