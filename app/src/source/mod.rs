//! Interchangeable temperature sources.
//!
//! Every source yields one [`Temperature`] per [`MeasurementSource::read`]. Base sources produce
//! values on their own; the transforming layers in [`crate::transform`] wrap another source and
//! are sources themselves, so chains of any depth can be built with [`SourceExt`].

mod config;
mod constant;
mod linear_ramp;
mod random;
mod sinusoidal;
mod weather;

pub use config::SourceConfig;
pub use constant::Constant;
pub use linear_ramp::LinearRamp;
pub use random::RandomInRange;
pub use sinusoidal::Sinusoidal;
pub use weather::{WeatherLookup, WeatherLookupError, parse_temperature};

use crate::core::{SharedSink, Temperature};
use crate::transform::{FahrenheitSource, LoggingSource, RoundingSource};

pub trait MeasurementSource {
    fn read(&mut self) -> anyhow::Result<Temperature>;
}

impl<S: MeasurementSource + ?Sized> MeasurementSource for Box<S> {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        (**self).read()
    }
}

pub trait SourceExt: MeasurementSource + Sized {
    fn logged(self, sink: SharedSink) -> LoggingSource<Self> {
        LoggingSource::new(self, sink)
    }

    fn rounded(self) -> RoundingSource<Self> {
        RoundingSource::new(self)
    }

    fn fahrenheit(self) -> FahrenheitSource<Self> {
        FahrenheitSource::new(self)
    }

    fn boxed(self) -> Box<dyn MeasurementSource>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<S: MeasurementSource> SourceExt for S {}
