//! Health scoring configuration.

use serde::Deserialize;

use crate::application::scoring::{HealthScorer, HealthWeights, ScoringMode};
use crate::port::outbound::liquidity::{FixedLiquidity, DEFAULT_LIQUIDITY_SCORE};

/// Per-asset health scoring settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Risk-only or blended scoring.
    #[serde(default)]
    pub mode: ScoringMode,
    /// Weight of the risk-factor score in the blend.
    #[serde(default = "default_risk_weight")]
    pub risk_weight: f64,
    /// Weight of the price-stability score in the blend.
    #[serde(default = "default_price_stability_weight")]
    pub price_stability_weight: f64,
    /// Weight of the liquidity score in the blend.
    #[serde(default = "default_liquidity_weight")]
    pub liquidity_weight: f64,
    /// Liquidity score used for every asset until real liquidity data exists.
    #[serde(default = "default_liquidity_fallback")]
    pub liquidity_fallback: u8,
}

const fn default_risk_weight() -> f64 {
    0.4
}

const fn default_price_stability_weight() -> f64 {
    0.3
}

const fn default_liquidity_weight() -> f64 {
    0.3
}

const fn default_liquidity_fallback() -> u8 {
    DEFAULT_LIQUIDITY_SCORE
}

impl ScoringConfig {
    #[must_use]
    pub fn weights(&self) -> HealthWeights {
        HealthWeights::new(
            self.risk_weight,
            self.price_stability_weight,
            self.liquidity_weight,
        )
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: ScoringMode::default(),
            risk_weight: default_risk_weight(),
            price_stability_weight: default_price_stability_weight(),
            liquidity_weight: default_liquidity_weight(),
            liquidity_fallback: default_liquidity_fallback(),
        }
    }
}

impl From<&ScoringConfig> for HealthScorer<FixedLiquidity> {
    fn from(config: &ScoringConfig) -> Self {
        Self::new(config.mode, config.weights())
            .with_liquidity(FixedLiquidity(config.liquidity_fallback))
    }
}
