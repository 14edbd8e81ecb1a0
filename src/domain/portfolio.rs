//! Portfolio-level summary types.
//!
//! [`PortfolioHealth`] is a value object: it is derived entirely from the NFT
//! list it was computed from and carries no identity of its own.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::nft::Nft;
use super::risk::Severity;

/// Lowest health score that counts as low risk.
pub const LOW_RISK_FLOOR: u8 = 80;

/// Lowest health score that counts as medium risk.
pub const MEDIUM_RISK_FLOOR: u8 = 50;

/// Risk band an asset falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Low,
    Medium,
    High,
}

impl HealthBand {
    /// Band for a health score: `>= 80` low, `50..80` medium, below 50 high.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= LOW_RISK_FLOOR {
            Self::Low
        } else if score >= MEDIUM_RISK_FLOOR {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Band matching a risk factor severity.
    #[must_use]
    pub const fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Low => Self::Low,
            Severity::Medium => Self::Medium,
            Severity::High => Self::High,
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Share of assets per risk band, as percentages of the asset count.
///
/// Each share is rounded independently, so the three need not add up to
/// exactly 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl RiskDistribution {
    #[must_use]
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    /// Share for a single band.
    #[must_use]
    pub const fn share(&self, band: HealthBand) -> f64 {
        match band {
            HealthBand::Low => self.low,
            HealthBand::Medium => self.medium,
            HealthBand::High => self.high,
        }
    }

    /// Sum of the three shares.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.low + self.medium + self.high
    }
}

/// Aggregate health of a wallet's NFT holdings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHealth {
    pub overall_score: u8,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub risk_distribution: RiskDistribution,
    pub top_performers: Vec<Nft>,
}

impl PortfolioHealth {
    /// Summary for a wallet holding nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top_performers.is_empty() && self.total_value.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(HealthBand::from_score(100), HealthBand::Low);
        assert_eq!(HealthBand::from_score(80), HealthBand::Low);
        assert_eq!(HealthBand::from_score(79), HealthBand::Medium);
        assert_eq!(HealthBand::from_score(50), HealthBand::Medium);
        assert_eq!(HealthBand::from_score(49), HealthBand::High);
        assert_eq!(HealthBand::from_score(0), HealthBand::High);
    }

    #[test]
    fn empty_summary_serializes_to_zero_shape() {
        let json = serde_json::to_value(PortfolioHealth::empty()).unwrap();
        assert_eq!(json["overallScore"], 0);
        assert_eq!(json["totalValue"], 0.0);
        assert_eq!(json["riskDistribution"]["low"], 0.0);
        assert_eq!(json["riskDistribution"]["medium"], 0.0);
        assert_eq!(json["riskDistribution"]["high"], 0.0);
        assert!(json["topPerformers"].as_array().unwrap().is_empty());
    }
}
