//! bitsCrunch REST API client.
//!
//! Two endpoints are used:
//! - `GET {base}/wallet/{address}/nfts` lists a wallet's NFTs with risk data
//! - `POST {base}/nft/analyze` runs risk analysis for a single token
//!
//! Timeouts and connection failures are retried with a fixed backoff. HTTP
//! status errors are returned immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::{AnalyzeRequest, RawNft, RawRisk};
use crate::domain::nft::Nft;
use crate::domain::risk::RiskFactor;
use crate::error::{Error, Result};
use crate::infrastructure::config::api::ApiConfig;
use crate::port::outbound::source::NftSource;

/// HTTP client for the bitsCrunch API.
pub struct BitscrunchClient {
    http: HttpClient,
    base_url: Url,
    api_key: Option<String>,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl BitscrunchClient {
    /// Create a client with default HTTP settings and a single attempt per
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
            api_key,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        })
    }

    /// Create a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not a valid URL.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            api_key: config.api_key.clone(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Fetch(format!("base URL cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn send_with_retry<T, F>(&self, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.authorize(build()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = response.error_for_status()?;

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    /// Fetch the raw NFT records held by a wallet.
    pub async fn get_wallet_nfts(&self, address: &str) -> Result<Vec<RawNft>> {
        let url = self.endpoint(&["wallet", address, "nfts"])?;
        info!(wallet = %address, "Fetching wallet NFTs");

        let nfts: Vec<RawNft> = self.send_with_retry(|| self.http.get(url.clone())).await?;
        debug!(count = nfts.len(), "Fetched wallet NFTs");
        Ok(nfts)
    }

    /// Request risk analysis for one token.
    pub async fn post_analyze(
        &self,
        contract_address: &str,
        token_id: &str,
    ) -> Result<Vec<RawRisk>> {
        let url = self.endpoint(&["nft", "analyze"])?;
        let body = AnalyzeRequest {
            contract_address,
            token_id,
        };
        info!(contract = %contract_address, token_id, "Analyzing NFT");

        let risks: Vec<RawRisk> = self
            .send_with_retry(|| self.http.post(url.clone()).json(&body))
            .await?;
        debug!(count = risks.len(), "Received risk factors");
        Ok(risks)
    }
}

#[async_trait]
impl NftSource for BitscrunchClient {
    async fn nfts_by_wallet(&self, address: &str) -> Result<Vec<Nft>> {
        let raw = self.get_wallet_nfts(address).await?;
        Ok(raw.into_iter().map(RawNft::into_nft).collect())
    }

    async fn analyze_nft(&self, contract_address: &str, token_id: &str) -> Result<Vec<RiskFactor>> {
        let raw = self.post_analyze(contract_address, token_id).await?;
        Ok(raw.into_iter().map(RiskFactor::from).collect())
    }

    fn name(&self) -> &'static str {
        "bitsCrunch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_encoded_segments() {
        let client = BitscrunchClient::new("https://api.example.com/api/v1", None).unwrap();
        let url = client.endpoint(&["wallet", "0xab cd", "nfts"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/wallet/0xab%20cd/nfts");
    }

    #[test]
    fn endpoint_handles_trailing_slash() {
        let client = BitscrunchClient::new("https://api.example.com/api/v1/", None).unwrap();
        let url = client.endpoint(&["nft", "analyze"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/nft/analyze");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            BitscrunchClient::new("not a url", None),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn from_config_uses_configured_attempts() {
        let config = ApiConfig {
            retry_max_attempts: 4,
            api_key: Some("key".into()),
            ..ApiConfig::default()
        };
        let client = BitscrunchClient::from_config(&config).unwrap();
        assert_eq!(client.retry_max_attempts, 4);
        assert_eq!(client.api_key.as_deref(), Some("key"));
        assert_eq!(client.name(), "bitsCrunch");
    }
}
