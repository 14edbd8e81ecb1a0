//! Handler for `nftsentry analyze`.

use tracing::info;

use super::command::AnalyzeArgs;
use super::{output, report};
use crate::adapter::outbound::file::FileSource;
use crate::application::scoring::HealthScorer;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `analyze`: load records, rescore unless told not to, summarize.
pub async fn execute(args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let source = FileSource::new(&args.file);
    let pb = output::spinner(&format!("Reading {}", args.file.display()));
    let nfts = match source.load().await {
        Ok(nfts) => {
            output::spinner_success(&pb, &format!("Loaded {} records", nfts.len()));
            nfts
        }
        Err(err) => {
            output::spinner_fail(&pb, "Failed to read records");
            return Err(err);
        }
    };

    let nfts = if args.keep_scores {
        nfts
    } else if args.risk_only {
        HealthScorer::risk_only().apply(nfts)?
    } else {
        config.health_scorer().apply(nfts)?
    };

    let health = config.portfolio_analyzer().analyze(&nfts)?;
    info!(
        path = %args.file.display(),
        count = nfts.len(),
        overall = health.overall_score,
        "Analyzed portfolio"
    );

    report::print_health(
        "analyze",
        &args.file.display().to_string(),
        nfts.len(),
        &health,
    )
}
