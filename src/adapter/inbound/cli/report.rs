//! Portfolio health rendering shared by `analyze` and `portfolio`.

use serde_json::json;
use tabled::{Table, Tabled};

use super::format;
use super::output;
use crate::domain::nft::Nft;
use crate::domain::portfolio::{HealthBand, PortfolioHealth};
use crate::error::Result;

#[derive(Tabled)]
struct PerformerRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Collection")]
    collection: String,
    #[tabled(rename = "Health")]
    health: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Risks")]
    risks: usize,
}

impl PerformerRow {
    fn new(rank: usize, nft: &Nft) -> Self {
        Self {
            rank,
            name: nft.name.clone(),
            collection: nft.collection.clone(),
            health: format::health_score(nft.health_score),
            value: format::eth(nft.value.current),
            risks: nft.risk_factors.len(),
        }
    }
}

/// Print a portfolio summary, or emit it as one JSON object in JSON mode.
pub fn print_health(
    command: &str,
    subject: &str,
    assets: usize,
    health: &PortfolioHealth,
) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "subject": subject,
            "assets": assets,
            "health": serde_json::to_value(health)?,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        output::result(health.overall_score);
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Portfolio Health");
    output::field("Source", subject);
    output::field("Assets", format::large_number(assets as f64));
    output::field("Overall", output::health(health.overall_score));
    output::field("Total value", format::eth(health.total_value));

    if health.is_empty() {
        output::note("No NFTs to analyze");
        return Ok(());
    }

    output::section("Risk Distribution");
    let distribution = &health.risk_distribution;
    output::field(
        "Low",
        output::positive(format::percentage(distribution.share(HealthBand::Low))),
    );
    output::field(
        "Medium",
        format::percentage(distribution.share(HealthBand::Medium)),
    );
    output::field(
        "High",
        output::negative(format::percentage(distribution.share(HealthBand::High))),
    );

    output::section("Top Performers");
    let rows: Vec<PerformerRow> = health
        .top_performers
        .iter()
        .enumerate()
        .map(|(i, nft)| PerformerRow::new(i + 1, nft))
        .collect();
    output::lines(&Table::new(rows).to_string());

    if output::verbosity() > 0 {
        for nft in &health.top_performers {
            output::note(&format!(
                "{} {} token {}",
                nft.id,
                format::short_address(&nft.contract_address),
                nft.token_id
            ));
        }
    }
    Ok(())
}
