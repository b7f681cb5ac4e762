pub mod sink;
pub mod time;
pub mod unit;

pub use sink::{OutputSink, SharedSink};
pub use unit::Temperature;
