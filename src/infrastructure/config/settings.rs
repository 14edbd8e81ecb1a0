//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. The API key comes from `BITSCRUNCH_API_KEY` only.
//!
//! # Example
//!
//! ```no_run
//! use nftsentry::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("nftsentry.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::api::ApiConfig;
use super::logging::LoggingConfig;
use super::portfolio::PortfolioConfig;
use super::scoring::ScoringConfig;
use crate::application::portfolio::PortfolioAnalyzer;
use crate::application::scoring::HealthScorer;
use crate::domain::nft::MAX_HEALTH_SCORE;
use crate::error::{ConfigError, Result};
use crate::port::outbound::liquidity::FixedLiquidity;

/// Allowed distance of a weight set's sum from 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Per-asset health scoring.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Portfolio summary settings.
    #[serde(default)]
    pub portfolio: PortfolioConfig,

    /// NFT data provider connection settings.
    #[serde(default)]
    pub api: ApiConfig,
}

fn check_weights(field: &'static str, weights: &[f64]) -> Result<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "weights must be finite and non-negative".to_string(),
        }
        .into());
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("weights must sum to 1, got {sum}"),
        }
        .into());
    }
    Ok(())
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key and URL override from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.api.load_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, or use defaults when it does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] when the file exists.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.api.load_env();
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        check_weights(
            "scoring weights",
            &[
                self.scoring.risk_weight,
                self.scoring.price_stability_weight,
                self.scoring.liquidity_weight,
            ],
        )?;
        if self.scoring.liquidity_fallback > MAX_HEALTH_SCORE {
            return Err(ConfigError::InvalidValue {
                field: "liquidity_fallback",
                reason: "must be between 0 and 100".to_string(),
            }
            .into());
        }

        check_weights(
            "portfolio weights",
            &[
                self.portfolio.average_health_weight,
                self.portfolio.risk_weight,
                self.portfolio.diversification_weight,
            ],
        )?;
        if self.portfolio.top_performers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_performers",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.api.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "base_url",
            reason: e.to_string(),
        })?;
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Health scorer built from the `[scoring]` section.
    #[must_use]
    pub fn health_scorer(&self) -> HealthScorer<FixedLiquidity> {
        HealthScorer::from(&self.scoring)
    }

    /// Portfolio analyzer built from the `[portfolio]` section.
    #[must_use]
    pub fn portfolio_analyzer(&self) -> PortfolioAnalyzer {
        PortfolioAnalyzer::from(&self.portfolio)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::portfolio::DistributionPolicy;
    use crate::application::scoring::ScoringMode;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.scoring.mode, ScoringMode::Blended);
        assert_eq!(config.scoring.liquidity_fallback, 70);
        assert_eq!(config.portfolio.top_performers, 5);
        assert_eq!(config.portfolio.distribution, DistributionPolicy::HealthBand);
        assert_eq!(config.api.retry_max_attempts, 3);
    }

    #[test]
    fn weights_must_be_non_negative() {
        let toml = r#"
[scoring]
risk_weight = 1.2
price_stability_weight = -0.2
liquidity_weight = 0.0
"#;
        assert!(Config::parse_toml(toml).is_err());
    }

    #[test]
    fn zero_top_performers_rejected() {
        let toml = "[portfolio]\ntop_performers = 0\n";
        assert!(matches!(
            Config::parse_toml(toml),
            Err(crate::error::Error::Config(ConfigError::InvalidValue {
                field: "top_performers",
                ..
            }))
        ));
    }

    #[test]
    fn builds_engine_components() {
        let toml = r#"
[scoring]
mode = "risk_only"

[portfolio]
distribution = "highest_severity"
top_performers = 3
"#;
        let config = Config::parse_toml(toml).unwrap();
        assert_eq!(config.health_scorer().mode(), ScoringMode::RiskOnly);
        let analyzer = config.portfolio_analyzer();
        assert_eq!(analyzer.policy(), DistributionPolicy::HighestSeverity);
        assert_eq!(analyzer.top_limit(), 3);
    }
}
