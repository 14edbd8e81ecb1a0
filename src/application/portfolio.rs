//! Portfolio analysis.
//!
//! Reduces a list of scored NFTs into a [`PortfolioHealth`] summary: total
//! value, risk distribution, top performers and an overall score.
//!
//! The overall score is a weighted composite of three 0-100 signals:
//!
//! | Signal | Default weight |
//! |--------|----------------|
//! | Average health score | 0.4 |
//! | `100 - high-risk share` | 0.3 |
//! | Diversification (distinct collections / asset count) | 0.3 |
//!
//! # Examples
//!
//! ```
//! use nftsentry::application::portfolio::PortfolioAnalyzer;
//! use nftsentry::domain::nft::Nft;
//! use rust_decimal_macros::dec;
//!
//! let assets = vec![
//!     Nft::new("a", "A", dec!(10)).with_health_score(90),
//!     Nft::new("b", "A", dec!(5)).with_health_score(60),
//!     Nft::new("c", "B", dec!(2)).with_health_score(30),
//! ];
//!
//! let health = PortfolioAnalyzer::default().analyze(&assets).unwrap();
//! assert_eq!(health.total_value, dec!(17));
//! assert_eq!(health.overall_score, 64);
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::to_score;
use crate::domain::error::DomainError;
use crate::domain::nft::Nft;
use crate::domain::portfolio::{HealthBand, PortfolioHealth, RiskDistribution};
use crate::domain::risk::highest_severity;

/// Default number of assets reported as top performers.
pub const DEFAULT_TOP_PERFORMERS: usize = 5;

/// How assets are assigned to risk bands for the distribution.
///
/// A single analysis always uses exactly one policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Band by the asset's own health score (`>= 80` low, `50..80` medium,
    /// below 50 high). Consistent with the overall score.
    #[default]
    HealthBand,
    /// Band by the asset's highest-severity risk factor. Assets with no risk
    /// factors count as low risk.
    HighestSeverity,
}

impl DistributionPolicy {
    /// Risk band of a single asset under this policy.
    #[must_use]
    pub fn classify(self, nft: &Nft) -> HealthBand {
        match self {
            Self::HealthBand => HealthBand::from_score(nft.health_score),
            Self::HighestSeverity => highest_severity(&nft.risk_factors)
                .map_or(HealthBand::Low, HealthBand::from_severity),
        }
    }
}

/// Weights for the overall portfolio score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioWeights {
    pub average_health: f64,
    pub risk: f64,
    pub diversification: f64,
}

impl Default for PortfolioWeights {
    fn default() -> Self {
        Self {
            average_health: 0.4,
            risk: 0.3,
            diversification: 0.3,
        }
    }
}

/// Round a percentage to one decimal place.
fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Share of each risk band across `assets`, in percent.
///
/// Counts are converted to percentages and only then rounded, one decimal
/// place per band. Returns all zeros for an empty slice.
#[must_use]
pub fn risk_distribution(assets: &[Nft], policy: DistributionPolicy) -> RiskDistribution {
    if assets.is_empty() {
        return RiskDistribution::default();
    }

    let (mut low, mut medium, mut high) = (0usize, 0usize, 0usize);
    for nft in assets {
        match policy.classify(nft) {
            HealthBand::Low => low += 1,
            HealthBand::Medium => medium += 1,
            HealthBand::High => high += 1,
        }
    }

    let total = assets.len() as f64;
    let percent = |count: usize| round_percent(count as f64 / total * 100.0);
    RiskDistribution::new(percent(low), percent(medium), percent(high))
}

/// Sum of current values.
///
/// # Errors
///
/// Returns [`DomainError::TotalValueOverflow`] when the sum exceeds the
/// `Decimal` range.
pub fn total_value(assets: &[Nft]) -> Result<Decimal, DomainError> {
    assets
        .iter()
        .try_fold(Decimal::ZERO, |total, nft| total.checked_add(nft.value.current))
        .ok_or(DomainError::TotalValueOverflow {
            assets: assets.len(),
        })
}

/// Diversification across collections: `min(100, distinct / count * 100)`.
#[must_use]
pub fn diversification_score(assets: &[Nft]) -> f64 {
    if assets.is_empty() {
        return 0.0;
    }
    let distinct = assets
        .iter()
        .map(|nft| nft.collection.as_str())
        .collect::<HashSet<_>>()
        .len();
    (distinct as f64 / assets.len() as f64 * 100.0).min(100.0)
}

/// Mean health score, or 0 for an empty slice.
#[must_use]
pub fn average_health(assets: &[Nft]) -> f64 {
    if assets.is_empty() {
        return 0.0;
    }
    let sum: u32 = assets.iter().map(|nft| u32::from(nft.health_score)).sum();
    f64::from(sum) / assets.len() as f64
}

/// Up to `limit` assets with the highest health scores.
///
/// Ties keep their input order.
#[must_use]
pub fn top_performers(assets: &[Nft], limit: usize) -> Vec<Nft> {
    let mut ranked: Vec<&Nft> = assets.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.health_score.cmp(&a.health_score));
    ranked.into_iter().take(limit).cloned().collect()
}

/// Produces [`PortfolioHealth`] summaries.
///
/// Stateless apart from its configuration; every call to
/// [`analyze`](Self::analyze) works only on the slice it is given.
#[derive(Debug, Clone)]
pub struct PortfolioAnalyzer {
    policy: DistributionPolicy,
    weights: PortfolioWeights,
    top_limit: usize,
}

impl Default for PortfolioAnalyzer {
    fn default() -> Self {
        Self::new(
            DistributionPolicy::default(),
            PortfolioWeights::default(),
            DEFAULT_TOP_PERFORMERS,
        )
    }
}

impl PortfolioAnalyzer {
    #[must_use]
    pub const fn new(
        policy: DistributionPolicy,
        weights: PortfolioWeights,
        top_limit: usize,
    ) -> Self {
        Self {
            policy,
            weights,
            top_limit,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> DistributionPolicy {
        self.policy
    }

    #[must_use]
    pub const fn top_limit(&self) -> usize {
        self.top_limit
    }

    /// Summarize a list of scored assets.
    ///
    /// An empty list yields [`PortfolioHealth::empty`].
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for the first asset with a negative value or
    /// price, or a health score above 100. Nothing is computed in that case.
    pub fn analyze(&self, assets: &[Nft]) -> Result<PortfolioHealth, DomainError> {
        if assets.is_empty() {
            return Ok(PortfolioHealth::empty());
        }
        for nft in assets {
            nft.validate()?;
        }

        let total_value = total_value(assets)?;
        let risk_distribution = risk_distribution(assets, self.policy);
        let top_performers = top_performers(assets, self.top_limit);
        let overall_score = self.overall_score(assets, &risk_distribution);

        debug!(
            assets = assets.len(),
            %total_value,
            overall_score,
            policy = ?self.policy,
            "Analyzed portfolio"
        );

        Ok(PortfolioHealth {
            overall_score,
            total_value,
            risk_distribution,
            top_performers,
        })
    }

    /// Weighted composite of average health, inverse high-risk share and
    /// diversification.
    #[must_use]
    pub fn overall_score(&self, assets: &[Nft], distribution: &RiskDistribution) -> u8 {
        if assets.is_empty() {
            return 0;
        }
        let risk = 100.0 - distribution.high;
        to_score(
            average_health(assets) * self.weights.average_health
                + risk * self.weights.risk
                + diversification_score(assets) * self.weights.diversification,
        )
    }
}
