//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::command::ConfigCommand;
use super::{format, output};
use crate::error::Result;
use crate::infrastructure::config::api::API_KEY_ENV;
use crate::infrastructure::config::settings::Config;

/// Dispatch a `config` subcommand.
pub fn execute(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show(arg) => execute_show(&arg.config),
        ConfigCommand::Validate(arg) => execute_validate(&arg.config),
    }
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let from_file = path.exists();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "fromFile": from_file,
            "logging": {
                "level": config.logging.level,
                "format": format!("{:?}", config.logging.format).to_lowercase(),
            },
            "scoring": {
                "mode": config.scoring.mode,
                "riskWeight": config.scoring.risk_weight,
                "priceStabilityWeight": config.scoring.price_stability_weight,
                "liquidityWeight": config.scoring.liquidity_weight,
                "liquidityFallback": config.scoring.liquidity_fallback,
            },
            "portfolio": {
                "distribution": config.portfolio.distribution,
                "topPerformers": config.portfolio.top_performers,
                "averageHealthWeight": config.portfolio.average_health_weight,
                "riskWeight": config.portfolio.risk_weight,
                "diversificationWeight": config.portfolio.diversification_weight,
            },
            "api": {
                "baseUrl": config.api.base_url,
                "apiKeyLoaded": config.api.has_api_key(),
                "timeoutMs": config.api.timeout_ms,
                "connectTimeoutMs": config.api.connect_timeout_ms,
                "retryMaxAttempts": config.api.retry_max_attempts,
                "retryBackoffMs": config.api.retry_backoff_ms,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !from_file {
        output::note("(file not found, showing defaults)");
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", format!("{:?}", config.logging.format).to_lowercase());

    output::section("Scoring");
    output::field("Mode", format!("{:?}", config.scoring.mode));
    output::field("Risk", format::percentage(config.scoring.risk_weight * 100.0));
    output::field(
        "Stability",
        format::percentage(config.scoring.price_stability_weight * 100.0),
    );
    output::field(
        "Liquidity",
        format::percentage(config.scoring.liquidity_weight * 100.0),
    );
    output::field("Liquidity score", config.scoring.liquidity_fallback);

    output::section("Portfolio");
    output::field("Distribution", format!("{:?}", config.portfolio.distribution));
    output::field("Top performers", config.portfolio.top_performers);
    output::field(
        "Avg health",
        format::percentage(config.portfolio.average_health_weight * 100.0),
    );
    output::field("Risk", format::percentage(config.portfolio.risk_weight * 100.0));
    output::field(
        "Diversification",
        format::percentage(config.portfolio.diversification_weight * 100.0),
    );

    output::section("API");
    output::field("Base URL", &config.api.base_url);
    output::field("Timeout", format!("{}ms", config.api.timeout_ms));
    output::field("Retries", config.api.retry_max_attempts);
    if config.api.has_api_key() {
        output::success(&format!("API key loaded from {API_KEY_ENV}"));
    } else {
        output::warning(&format!("{API_KEY_ENV} not set"));
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
            "apiKeyLoaded": config.api.has_api_key(),
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");
    if !config.api.has_api_key() {
        output::warning(&format!(
            "{API_KEY_ENV} not set; portfolio and verify will fail"
        ));
    }
    output::hint(&format!("nftsentry config show -c {}", path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CONFIG_TEMPLATE: &str = include_str!("../../../../nftsentry.toml.example");

    #[test]
    fn template_is_valid_config() {
        assert!(Config::parse_toml(CONFIG_TEMPLATE).is_ok());
    }

    #[test]
    fn validate_accepts_template_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nftsentry.toml");
        fs::write(&path, CONFIG_TEMPLATE).expect("write config");
        assert!(execute_validate(&path).is_ok());
    }

    #[test]
    fn validate_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(execute_validate(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn show_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(execute_show(&dir.path().join("missing.toml")).is_ok());
    }
}
