use std::fmt::Display;

/// A temperature reading. The scale is whatever the producing source chain yields:
/// Celsius from the base sources, Fahrenheit after a conversion layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Temperature(pub f64);

impl Temperature {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn celsius_to_fahrenheit(&self) -> Temperature {
        Temperature(self.0 * 9.0 / 5.0 + 32.0)
    }

    pub fn round(&self) -> Temperature {
        Temperature(self.0.round())
    }

    pub fn mean(values: &[Temperature]) -> Option<Temperature> {
        if values.is_empty() {
            return None;
        }

        let sum: Temperature = values.iter().copied().sum();
        Some(sum / values.len() as f64)
    }
}

impl From<f64> for Temperature {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::ops::Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Self) -> Self::Output {
        Temperature(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign<f64> for Temperature {
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl std::ops::Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Self::Output {
        Temperature(self.0 / rhs)
    }
}

impl std::iter::Sum for Temperature {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Temperature::default(), |acc, t| acc + t)
    }
}
