use media_providers::{DEFAULT_RAPIDAPI_HOST, DEFAULT_SEARCH_ENDPOINT};
use serde::Deserialize;
use std::time::Duration;

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_rapidapi_host() -> String {
    DEFAULT_RAPIDAPI_HOST.to_string()
}

fn default_provider_endpoint() -> String {
    format!("https://{}", DEFAULT_RAPIDAPI_HOST)
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_quality() -> String {
    conversion_processors::DEFAULT_QUALITY.to_string()
}

fn default_cors_origins() -> String {
    "http://localhost:5173,http://localhost:5174".to_string()
}

fn default_link_ttl_hours() -> u64 {
    24u64
}

fn default_sweep_interval_secs() -> u64 {
    3600u64
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RapidApiCredentials {
    #[serde(rename = "rapidapi_key")]
    pub(crate) key: String,
    #[serde(rename = "rapidapi_host", default = "default_rapidapi_host")]
    pub(crate) host: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(flatten)]
    pub(crate) rapidapi: RapidApiCredentials,
    #[serde(default = "default_provider_endpoint")]
    pub(crate) provider_endpoint: String,
    #[serde(default = "default_search_endpoint")]
    pub(crate) search_endpoint: String,
    #[serde(default = "default_quality")]
    pub(crate) default_quality: String,
    #[serde(default = "default_cors_origins")]
    pub(crate) cors_origins: String,
    #[serde(default = "default_link_ttl_hours")]
    pub(crate) link_ttl_hours: u64,
    #[serde(default = "default_sweep_interval_secs")]
    pub(crate) sweep_interval_secs: u64,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        match envy::from_env::<Self>() {
            Ok(config) => config,
            Err(error) => panic!("Missing environment variable: {:#?}", error),
        }
    }

    pub(crate) fn cors_origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }

    pub(crate) fn link_ttl(&self) -> Duration {
        Duration::from_secs(self.link_ttl_hours * 3600)
    }

    pub(crate) fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}
