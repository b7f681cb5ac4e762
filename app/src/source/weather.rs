use derive_more::derive::{Display, Error};
use infrastructure::HttpClientConfig;
use reqwest::blocking::Client;
use serde_json::Value;

use super::MeasurementSource;
use crate::core::Temperature;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com";

const TEMPERATURE_POINTER: &str = "/current_weather/temperature";

#[derive(Debug, Display, Error)]
pub enum WeatherLookupError {
    #[display("Weather request timed out")]
    Timeout(#[error(source)] reqwest::Error),

    #[display("Weather request failed")]
    Transport(#[error(source)] reqwest::Error),
}

impl From<reqwest::Error> for WeatherLookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            WeatherLookupError::Timeout(error)
        } else {
            WeatherLookupError::Transport(error)
        }
    }
}

/// Current outside temperature for a coordinate, fetched from an Open-Meteo compatible API.
///
/// Every read performs one blocking request. Transport failures and non-success statuses are
/// returned as [`WeatherLookupError`]; a response without a usable temperature reads as `0.0`.
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    client: Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
}

impl WeatherLookup {
    pub fn new(latitude: f64, longitude: f64, http: &HttpClientConfig) -> anyhow::Result<Self> {
        Self::with_base_url(OPEN_METEO_URL, latitude, longitude, http)
    }

    pub fn with_base_url(
        base_url: &str,
        latitude: f64,
        longitude: f64,
        http: &HttpClientConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            client: http.new_blocking_client()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            latitude,
            longitude,
        })
    }

    #[tracing::instrument(skip(self), fields(latitude = self.latitude, longitude = self.longitude))]
    fn fetch(&self) -> Result<String, WeatherLookupError> {
        let url = format!("{}/v1/forecast", self.base_url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current_weather", "true".to_owned()),
            ])
            .send()?
            .error_for_status()?;

        tracing::debug!("Weather response status: {}", response.status());

        Ok(response.text()?)
    }
}

impl MeasurementSource for WeatherLookup {
    fn read(&mut self) -> anyhow::Result<Temperature> {
        let body = self.fetch()?;
        Ok(parse_temperature(&body))
    }
}

/// Extracts `current_weather.temperature` from a forecast response body.
///
/// Numbers and numeric strings are accepted. Anything else yields `0.0`.
pub fn parse_temperature(body: &str) -> Temperature {
    let value = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.pointer(TEMPERATURE_POINTER).and_then(as_number));

    match value {
        Some(value) => Temperature(value),
        None => {
            tracing::warn!("No temperature found in weather response, falling back to 0.0");
            Temperature(0.0)
        }
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
