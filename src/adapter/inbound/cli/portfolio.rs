//! Handler for `nftsentry portfolio`.

use tracing::info;

use super::command::PortfolioArgs;
use super::{output, report};
use crate::adapter::outbound::bitscrunch::BitscrunchClient;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::api::API_KEY_ENV;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::source::NftSource;

/// Execute `portfolio`: fetch the wallet, score each NFT, summarize.
pub async fn execute(args: &PortfolioArgs, config: &Config) -> Result<()> {
    if !config.api.has_api_key() {
        return Err(ConfigError::MissingField { field: API_KEY_ENV }.into());
    }
    let client = BitscrunchClient::from_config(&config.api)?;
    fetch_and_report(&client, &args.address, config).await
}

/// Fetch a wallet from any source and print its portfolio health.
pub async fn fetch_and_report(
    source: &dyn NftSource,
    address: &str,
    config: &Config,
) -> Result<()> {
    let pb = output::spinner(&format!("Fetching NFTs from {}", source.name()));
    let nfts = match source.nfts_by_wallet(address).await {
        Ok(nfts) => {
            output::spinner_success(&pb, &format!("Fetched {} NFTs", nfts.len()));
            nfts
        }
        Err(err) => {
            output::spinner_fail(&pb, "Failed to fetch NFTs");
            return Err(err);
        }
    };

    let nfts = config.health_scorer().apply(nfts)?;
    let health = config.portfolio_analyzer().analyze(&nfts)?;
    info!(
        wallet = %address,
        source = source.name(),
        count = nfts.len(),
        overall = health.overall_score,
        "Analyzed wallet"
    );

    report::print_health("portfolio", address, nfts.len(), &health)
}
