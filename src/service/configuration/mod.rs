mod telemetry;

pub use telemetry::*;

use envconfig::Envconfig;
use std::collections::HashMap;
use std::fmt::Debug;

const DEFAULT_URL: &str = "http://localhost/api/v4/";

#[derive(Clone, Envconfig)]
pub struct MayanConfig {
    /// Base URL of the Mayan EDMS REST API
    #[envconfig(from = "MAYAN_EDMS_URL")]
    url: String,
    #[envconfig(from = "MAYAN_EDMS_USERNAME", default = "")]
    username: String,
    #[envconfig(from = "MAYAN_EDMS_PASSWORD", default = "")]
    password: String,
    #[envconfig(from = "TIMEOUT", default = "30000")]
    timeout: u64,
    /// Retries for transient failures, on top of the first attempt
    #[envconfig(from = "MAX_RETRIES", default = "3")]
    max_retries: u32,
}

impl Debug for MayanConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MayanConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl MayanConfig {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> Option<&str> {
        Some(self.username.as_str()).filter(|username| !username.is_empty())
    }

    pub fn password(&self) -> Option<&str> {
        Some(self.password.as_str()).filter(|password| !password.is_empty())
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        // dotenv().ok() is expected to have been called by the caller
        MayanConfig::init_from_env()
    }
}

impl From<HashMap<&str, &str>> for MayanConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let url = value.get("MAYAN_EDMS_URL").unwrap_or(&DEFAULT_URL).to_string();
        let username = value.get("MAYAN_EDMS_USERNAME").unwrap_or(&"").to_string();
        let password = value.get("MAYAN_EDMS_PASSWORD").unwrap_or(&"").to_string();
        let timeout = value
            .get("TIMEOUT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30000);
        let max_retries = value
            .get("MAX_RETRIES")
            .and_then(|value| value.parse().ok())
            .unwrap_or(3);

        Self {
            url,
            username,
            password,
            timeout,
            max_retries,
        }
    }
}
