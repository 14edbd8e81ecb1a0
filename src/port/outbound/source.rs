//! NFT data source port.
//!
//! The scoring engine never fetches data. Whatever feeds it (an HTTP API, a
//! file on disk, a test fixture) implements [`NftSource`].

use async_trait::async_trait;

use crate::domain::{nft::Nft, risk::RiskFactor};
use crate::error::Result;

/// Supplier of NFT records and per-token risk analysis.
#[async_trait]
pub trait NftSource: Send + Sync {
    /// NFTs held by a wallet, with risk factors and price history populated.
    ///
    /// Health scores on returned records are whatever the source supplied;
    /// callers re-score before summarizing.
    async fn nfts_by_wallet(&self, address: &str) -> Result<Vec<Nft>>;

    /// Risk factors detected for a single token.
    async fn analyze_nft(&self, contract_address: &str, token_id: &str)
        -> Result<Vec<RiskFactor>>;

    /// Source name for logging.
    fn name(&self) -> &'static str;
}
