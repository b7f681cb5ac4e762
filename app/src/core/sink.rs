//! Destinations for the thermometer's textual output.
//!
//! Readings, logged values and reactor messages are written to an [`OutputSink`] rather than
//! straight to stdout, so the same components can print, log, or record what they emit.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;

pub trait OutputSink {
    fn emit(&self, line: &str);
}

pub type SharedSink = Rc<dyn OutputSink>;

pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

pub struct TracingSink;

impl OutputSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "thermometer::output", "{}", line);
    }
}

/// Keeps every emitted line in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl OutputSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputConfig {
    #[default]
    Stdout,
    Tracing,
}

impl OutputConfig {
    pub fn new_sink(&self) -> SharedSink {
        match self {
            OutputConfig::Stdout => Rc::new(StdoutSink),
            OutputConfig::Tracing => Rc::new(TracingSink),
        }
    }
}
