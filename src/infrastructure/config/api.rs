//! NFT data API configuration.

use serde::Deserialize;

/// Environment variable holding the API key. Never read from the file.
pub const API_KEY_ENV: &str = "BITSCRUNCH_API_KEY";

/// Environment variable that overrides `base_url`.
pub const API_URL_ENV: &str = "BITSCRUNCH_API_URL";

/// HTTP settings for the NFT data provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the provider's REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token, loaded from `BITSCRUNCH_API_KEY`.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request, including the first.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Delay between attempts in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_base_url() -> String {
    "https://api.bitscrunch.com/api/v1".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl ApiConfig {
    /// Fill in the key and URL override from the environment.
    pub fn load_env(&mut self) {
        self.api_key = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}
