mod http;
mod monitoring;

pub use monitoring::EnvFilterConfig;
pub use monitoring::MonitoringConfig;

pub use http::client::HttpClientConfig;
