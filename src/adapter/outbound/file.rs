//! Offline NFT source backed by a JSON file.
//!
//! The file holds an array of NFT records in the same camelCase shape the
//! CLI prints, so a saved portfolio can be fed back in.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::nft::Nft;
use crate::domain::risk::RiskFactor;
use crate::error::Result;
use crate::port::outbound::source::NftSource;

/// Reads NFT records from a JSON file on each call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record in the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// NFT records.
    pub async fn load(&self) -> Result<Vec<Nft>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let nfts: Vec<Nft> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = nfts.len(), "Loaded NFT records");
        Ok(nfts)
    }
}

#[async_trait]
impl NftSource for FileSource {
    async fn nfts_by_wallet(&self, address: &str) -> Result<Vec<Nft>> {
        let nfts = self.load().await?;
        Ok(nfts
            .into_iter()
            .filter(|nft| nft.owner.eq_ignore_ascii_case(address))
            .collect())
    }

    async fn analyze_nft(&self, contract_address: &str, token_id: &str) -> Result<Vec<RiskFactor>> {
        let nfts = self.load().await?;
        Ok(nfts
            .into_iter()
            .find(|nft| {
                nft.contract_address.eq_ignore_ascii_case(contract_address)
                    && nft.token_id == token_id
            })
            .map(|nft| nft.risk_factors)
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
