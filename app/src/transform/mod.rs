//! Sources that wrap another source.
//!
//! Each layer reads its inner source exactly once per read and never swallows its errors.
//! Layers stack in any order and the order is observable: logging before rounding reports the
//! raw value, logging after rounding reports the rounded one.

mod config;
mod fahrenheit;
mod logging;
mod rounding;

pub use config::TransformConfig;
pub use fahrenheit::FahrenheitSource;
pub use logging::LoggingSource;
pub use rounding::RoundingSource;
