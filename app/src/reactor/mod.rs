mod heating_controller;
mod threshold_alert;

pub use heating_controller::{HeatingController, HeatingControllerConfig, WINDOW_SIZE};
pub use threshold_alert::{ThresholdAlert, ThresholdAlertConfig};

use crate::core::Temperature;

/// Receives every reading a [`crate::thermometer::Thermometer`] broadcasts.
pub trait Reactor {
    fn on_reading(&mut self, value: Temperature);
}
