use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
    user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl HttpClientConfig {
    pub fn new(timeout_secs: u64, user_agent: Option<String>) -> Self {
        Self {
            timeout_secs,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds a blocking client. Every request made with it is bounded by the configured timeout.
    pub fn new_blocking_client(&self) -> anyhow::Result<Client> {
        let mut headers = HeaderMap::new();

        if let Some(agent) = &self.user_agent {
            headers.insert(header::USER_AGENT, HeaderValue::from_str(agent)?);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout())
            .build()?;

        Ok(client)
    }
}
