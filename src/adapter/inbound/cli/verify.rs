//! Handler for `nftsentry verify`.

use chrono::Utc;
use serde_json::json;
use tracing::info;

use super::command::VerifyArgs;
use super::{format, output};
use crate::adapter::outbound::bitscrunch::BitscrunchClient;
use crate::application::verification::{verify, Verification};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::api::API_KEY_ENV;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::source::NftSource;

/// Execute `verify` against the configured API.
pub async fn execute(args: &VerifyArgs, config: &Config) -> Result<()> {
    if !config.api.has_api_key() {
        return Err(ConfigError::MissingField { field: API_KEY_ENV }.into());
    }
    let client = BitscrunchClient::from_config(&config.api)?;
    let verdict = check(&client, &args.contract, &args.token_id).await?;
    print_verdict(&args.contract, &args.token_id, &verdict)
}

/// Fetch risk factors for one token and build its verdict.
pub async fn check(source: &dyn NftSource, contract: &str, token_id: &str) -> Result<Verification> {
    let pb = output::spinner(&format!("Analyzing token {token_id}"));
    let factors = match source.analyze_nft(contract, token_id).await {
        Ok(factors) => {
            output::spinner_success(&pb, "Analysis complete");
            factors
        }
        Err(err) => {
            output::spinner_fail(&pb, "Analysis failed");
            return Err(err);
        }
    };

    let verdict = verify(factors, Utc::now());
    info!(
        contract = %contract,
        token_id,
        score = verdict.score,
        verified = verdict.is_verified,
        "Verified token"
    );
    Ok(verdict)
}

fn print_verdict(contract: &str, token_id: &str, verdict: &Verification) -> Result<()> {
    if output::is_json() {
        output::json_output(json!({
            "command": "verify",
            "contractAddress": contract,
            "tokenId": token_id,
            "verification": serde_json::to_value(verdict)?,
        }));
        return Ok(());
    }

    output::section("Verification");
    output::field("Contract", format::short_address(contract));
    output::field("Token", token_id);
    output::field("Score", verdict.score);
    if verdict.is_verified {
        output::success("Verified");
    } else {
        output::warning("Not verified");
    }

    if verdict.risk_factors.is_empty() {
        return Ok(());
    }
    output::section("Risk Factors");
    for factor in &verdict.risk_factors {
        let detected = format::relative_time(factor.detected_at(), verdict.timestamp);
        output::field(
            &factor.kind().to_string(),
            format!(
                "{} {} {}",
                factor.severity(),
                factor.description(),
                output::muted(detected)
            ),
        );
    }
    Ok(())
}
