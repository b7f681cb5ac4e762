use serde::Deserialize;

use super::Reactor;
use crate::core::{SharedSink, Temperature};

pub const WINDOW_SIZE: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct HeatingControllerConfig {
    pub on_threshold: f64,
    pub off_threshold: f64,
}

/// Decides on heating from the mean of consecutive, non-overlapping windows of ten readings.
///
/// On the tenth reading of a window the mean is emitted, followed by `Heating off` when it is
/// above `off_threshold` or `Heating on` when it is below `on_threshold`. The window is then
/// cleared. Thresholds are taken as given; with `on_threshold >= off_threshold` a mean can
/// satisfy neither branch.
pub struct HeatingController {
    on_threshold: Temperature,
    off_threshold: Temperature,
    window: Vec<Temperature>,
    sink: SharedSink,
}

impl HeatingController {
    pub fn new(on_threshold: impl Into<Temperature>, off_threshold: impl Into<Temperature>, sink: SharedSink) -> Self {
        Self {
            on_threshold: on_threshold.into(),
            off_threshold: off_threshold.into(),
            window: Vec::with_capacity(WINDOW_SIZE),
            sink,
        }
    }

    pub fn from_config(config: &HeatingControllerConfig, sink: SharedSink) -> Self {
        Self::new(config.on_threshold, config.off_threshold, sink)
    }

    pub fn buffered(&self) -> usize {
        self.window.len()
    }

    fn evaluate(&mut self) {
        if let Some(mean) = Temperature::mean(&self.window) {
            self.sink.emit(&format!("Average temperature: {mean:.2}"));

            if mean > self.off_threshold {
                tracing::info!("Window mean {} above {}, turning heating off", mean, self.off_threshold);
                self.sink.emit("Heating off");
            } else if mean < self.on_threshold {
                tracing::info!("Window mean {} below {}, turning heating on", mean, self.on_threshold);
                self.sink.emit("Heating on");
            }
        }

        self.window.clear();
    }
}

impl Reactor for HeatingController {
    fn on_reading(&mut self, value: Temperature) {
        self.window.push(value);

        if self.window.len() >= WINDOW_SIZE {
            self.evaluate();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::core::sink::RecordingSink;

    fn controller() -> (HeatingController, Rc<RecordingSink>) {
        let sink = RecordingSink::new();
        (HeatingController::new(19.0, 23.0, sink.clone()), sink)
    }

    fn feed(controller: &mut HeatingController, values: impl IntoIterator<Item = f64>) {
        for value in values {
            controller.on_reading(Temperature(value));
        }
    }

    #[test]
    fn test_nothing_emitted_before_tenth_reading() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [10.0; 9]);

        assert!(sink.lines().is_empty());
        assert_eq!(controller.buffered(), 9);
    }

    #[test]
    fn test_tenth_reading_evaluates_and_resets() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [21.0; 10]);

        assert_eq!(sink.lines(), vec!["Average temperature: 21.00"]);
        assert_eq!(controller.buffered(), 0);
    }

    #[test]
    fn test_low_mean_turns_heating_on() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [10.0; 10]);

        assert_eq!(sink.lines(), vec!["Average temperature: 10.00", "Heating on"]);
    }

    #[test]
    fn test_high_mean_turns_heating_off() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [30.0; 10]);

        assert_eq!(sink.lines(), vec!["Average temperature: 30.00", "Heating off"]);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [19.0; 10]);
        feed(&mut controller, [23.0; 10]);

        assert_eq!(
            sink.lines(),
            vec!["Average temperature: 19.00", "Average temperature: 23.00"]
        );
    }

    #[test]
    fn test_windows_do_not_overlap() {
        let (mut controller, sink) = controller();

        feed(&mut controller, [30.0; 10]);
        feed(&mut controller, [10.0; 9]);
        assert_eq!(sink.take().len(), 2);

        controller.on_reading(Temperature(10.0));
        assert_eq!(sink.lines(), vec!["Average temperature: 10.00", "Heating on"]);
    }

    #[test]
    fn test_mean_of_mixed_window() {
        let (mut controller, sink) = controller();

        feed(&mut controller, (1..=10).map(|v| v as f64 * 4.0));

        assert_eq!(sink.lines(), vec!["Average temperature: 22.00"]);
    }

    #[test]
    fn test_inverted_thresholds_kept_as_given() {
        let sink = RecordingSink::new();
        let mut controller = HeatingController::new(25.0, 15.0, sink.clone());

        feed(&mut controller, [20.0; 10]);

        assert_eq!(sink.lines(), vec!["Average temperature: 20.00", "Heating off"]);
    }
}
