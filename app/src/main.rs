use std::cell::RefCell;
use std::rc::Rc;

use settings::Settings;
use thermometer::Thermometer;
use thermometer::reactor::{HeatingController, ThresholdAlert};
use thermometer::transform::TransformConfig;

mod settings;

pub fn main() {
    let settings = Settings::new().expect("Error reading configuration");

    settings.monitoring.init().expect("Error initializing monitoring");

    if let Err(e) = run(&settings) {
        tracing::error!("Measurement run failed: {:?}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let sink = settings.output.new_sink();

    let base = settings.source.build(&settings.http)?;
    let source = TransformConfig::wrap_all(&settings.transforms, base, &sink);

    let mut thermometer = Thermometer::new(source, sink.clone());

    let alert = Rc::new(RefCell::new(ThresholdAlert::from_config(&settings.alert, sink.clone())));
    let heating = Rc::new(RefCell::new(HeatingController::from_config(&settings.heating, sink.clone())));
    thermometer.add_reactor(&alert);
    thermometer.add_reactor(&heating);

    tracing::info!(
        "Starting {} measurements with {} reactors",
        settings.measurements,
        thermometer.reactor_count()
    );
    thermometer.measure(settings.measurements)?;
    tracing::info!("Measurements completed");

    Ok(())
}
