use super::MeasurementSource;
use crate::core::Temperature;
use crate::core::time::now_millis;

/// `amplitude * sin(frequency * now + phase)` with `now` in milliseconds, sampled on every read.
#[derive(Debug, Clone)]
pub struct Sinusoidal {
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl Sinusoidal {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    fn value_at(&self, millis: i64) -> Temperature {
        Temperature(self.amplitude * (self.frequency * millis as f64 + self.phase).sin())
    }
}

impl MeasurementSource for Sinusoidal {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        Ok(self.value_at(now_millis()))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::core::time::with_fixed_now;

    fn assert_close(actual: Temperature, expected: f64) {
        assert!((actual.value() - expected).abs() < 1e-9, "{actual:?} != {expected}");
    }

    #[test]
    fn test_follows_wave_over_time() {
        let mut source = Sinusoidal::new(10.0, FRAC_PI_2, 0.0);

        let trajectory: Vec<Temperature> = (0..4)
            .map(|ms| with_fixed_now(ms, || source.read().unwrap()))
            .collect();

        assert_close(trajectory[0], 0.0);
        assert_close(trajectory[1], 10.0);
        assert_close(trajectory[2], 0.0);
        assert_close(trajectory[3], -10.0);
    }

    #[test]
    fn test_phase_shifts_wave() {
        let mut source = Sinusoidal::new(2.0, 1.0, FRAC_PI_2);

        assert_close(with_fixed_now(0, || source.read().unwrap()), 2.0);
    }

    #[test]
    fn test_same_instant_same_value() {
        let mut source = Sinusoidal::new(5.0, 0.001, 0.3);

        let (a, b) = with_fixed_now(1_700_000_000_000, || (source.read().unwrap(), source.read().unwrap()));

        assert_eq!(a, b);
    }

    #[test]
    fn test_bounded_by_amplitude_on_wall_clock() {
        let mut source = Sinusoidal::new(3.0, 0.01, 0.0);

        for _ in 0..10 {
            assert!(source.read().unwrap().value().abs() <= 3.0);
        }
    }
}
