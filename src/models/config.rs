//! Configuration model loaded from external sources.

use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::repository::ApiClientConfig;

fn default_per_page() -> u32 {
    15
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

fn default_read_timeout_ms() -> u64 {
    30000
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the web server and the terminal client.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies, at least 64 bytes.
    pub secret: String,
    /// Base URL of the inventory REST API, e.g. `http://127.0.0.1:8000/api`.
    pub api_base_url: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl ServerConfig {
    /// Reads `config/default.yaml`, the optional `config/{APP_ENV}` profile
    /// and `APP_*` environment variables, later sources winning.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn api_client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new(&self.api_base_url)
            .with_timeouts(self.connect_timeout_ms, self.read_timeout_ms)
    }
}
