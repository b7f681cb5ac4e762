mod temperature;

pub use temperature::Temperature;
