//! The thermometer pulls readings from its source and pushes each one to its reactors.

mod registrations;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;

pub use registrations::Registrations;

use crate::core::{SharedSink, Temperature};
use crate::reactor::Reactor;
use crate::source::MeasurementSource;

pub struct Thermometer {
    source: Box<dyn MeasurementSource>,
    registrations: Registrations,
    sink: SharedSink,
}

impl Thermometer {
    pub fn new(source: impl MeasurementSource + 'static, sink: SharedSink) -> Self {
        Self {
            source: Box::new(source),
            registrations: Registrations::default(),
            sink,
        }
    }

    pub fn set_source(&mut self, source: impl MeasurementSource + 'static) {
        self.source = Box::new(source);
    }

    pub fn add_reactor<R: Reactor + 'static>(&self, reactor: &Rc<RefCell<R>>) {
        self.registrations.add(reactor);
    }

    /// Unregisters `reactor`. Unknown reactors are ignored.
    pub fn remove_reactor<R: Reactor + ?Sized>(&self, reactor: &Rc<RefCell<R>>) {
        if !self.registrations.remove(reactor) {
            tracing::debug!("Ignoring removal of unregistered reactor");
        }
    }

    pub fn reactor_count(&self) -> usize {
        self.registrations.len()
    }

    /// Shared handle to the registration list, e.g. for reactors that (un)register during a broadcast.
    pub fn registrations(&self) -> Registrations {
        self.registrations.clone()
    }

    /// Takes `times` readings. Each reading is emitted and then delivered to the reactors
    /// registered when the iteration started, in registration order.
    ///
    /// Stops at the first source error; readings already broadcast stay delivered.
    #[tracing::instrument(skip(self))]
    pub fn measure(&mut self, times: usize) -> anyhow::Result<()> {
        for iteration in 1..=times {
            let value = self
                .source
                .read()
                .with_context(|| format!("Error reading temperature in iteration {iteration} of {times}"))?;

            tracing::debug!(iteration, %value, "Broadcasting reading");
            self.sink.emit(&format!("Measured temperature: {value}"));
            self.broadcast(value);
        }

        Ok(())
    }

    fn broadcast(&self, value: Temperature) {
        for reactor in self.registrations.snapshot() {
            reactor.borrow_mut().on_reading(value);
        }
    }
}
