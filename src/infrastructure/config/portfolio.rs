//! Portfolio analysis configuration.

use serde::Deserialize;

use crate::application::portfolio::{
    DistributionPolicy, PortfolioAnalyzer, PortfolioWeights, DEFAULT_TOP_PERFORMERS,
};

/// Portfolio summary settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    /// How assets are assigned to risk bands.
    #[serde(default)]
    pub distribution: DistributionPolicy,
    /// Number of top performers to report.
    #[serde(default = "default_top_performers")]
    pub top_performers: usize,
    /// Weight of the average health score in the overall score.
    #[serde(default = "default_average_health_weight")]
    pub average_health_weight: f64,
    /// Weight of the inverse high-risk share in the overall score.
    #[serde(default = "default_risk_weight")]
    pub risk_weight: f64,
    /// Weight of collection diversification in the overall score.
    #[serde(default = "default_diversification_weight")]
    pub diversification_weight: f64,
}

const fn default_top_performers() -> usize {
    DEFAULT_TOP_PERFORMERS
}

const fn default_average_health_weight() -> f64 {
    0.4
}

const fn default_risk_weight() -> f64 {
    0.3
}

const fn default_diversification_weight() -> f64 {
    0.3
}

impl PortfolioConfig {
    #[must_use]
    pub fn weights(&self) -> PortfolioWeights {
        PortfolioWeights {
            average_health: self.average_health_weight,
            risk: self.risk_weight,
            diversification: self.diversification_weight,
        }
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            distribution: DistributionPolicy::default(),
            top_performers: default_top_performers(),
            average_health_weight: default_average_health_weight(),
            risk_weight: default_risk_weight(),
            diversification_weight: default_diversification_weight(),
        }
    }
}

impl From<&PortfolioConfig> for PortfolioAnalyzer {
    fn from(config: &PortfolioConfig) -> Self {
        Self::new(config.distribution, config.weights(), config.top_performers)
    }
}
