//! Simulated thermometer: pluggable temperature sources, stackable transforming layers, and
//! reactors that are notified of every reading.

pub mod core;
pub mod reactor;
pub mod source;
pub mod thermometer;
pub mod transform;

pub use crate::core::Temperature;
pub use crate::thermometer::Thermometer;
