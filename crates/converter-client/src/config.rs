use serde::Deserialize;
use std::time::Duration;

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_validation_delay_ms() -> u64 {
    500u64
}

fn default_download_stagger_ms() -> u64 {
    500u64
}

#[derive(Clone, Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_validation_delay_ms")]
    pub validation_delay_ms: u64,
    #[serde(default = "default_download_stagger_ms")]
    pub download_stagger_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            validation_delay_ms: default_validation_delay_ms(),
            download_stagger_ms: default_download_stagger_ms(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Self>()
    }

    pub fn validation_delay(&self) -> Duration {
        Duration::from_millis(self.validation_delay_ms)
    }

    pub fn download_stagger(&self) -> Duration {
        Duration::from_millis(self.download_stagger_ms)
    }
}
