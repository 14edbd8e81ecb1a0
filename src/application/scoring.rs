//! Per-asset health scoring.
//!
//! The risk score starts at 100 and loses a fixed penalty per flagged risk
//! factor. The blended health score mixes that risk score with a
//! price-stability score and a liquidity score using [`HealthWeights`].
//!
//! # Examples
//!
//! ```
//! use nftsentry::application::scoring::{risk_score, HealthScorer};
//! use nftsentry::domain::nft::Nft;
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(risk_score(&[]), 100);
//!
//! // No factors (100), no history (50), default liquidity (70):
//! // 0.4 * 100 + 0.3 * 50 + 0.3 * 70 = 76
//! let nft = Nft::new("nft-1", "Collection", dec!(1));
//! assert_eq!(HealthScorer::default().score(&nft)?, 76);
//! # Ok::<(), nftsentry::domain::error::DomainError>(())
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::nft::{Nft, PricePoint, MAX_HEALTH_SCORE};
use crate::domain::risk::RiskFactor;
use crate::port::outbound::liquidity::{FixedLiquidity, LiquiditySignal};

/// Score given to assets with too little price history to judge stability.
pub const NEUTRAL_STABILITY_SCORE: u8 = 50;

/// Minimum number of price points needed to measure volatility.
pub const MIN_PRICE_POINTS: usize = 2;

/// Risk-adjusted score from a list of risk factors.
///
/// Each factor subtracts its severity penalty (high 30, medium 15, low 5).
/// Penalties add up without a per-factor cap and the result is clamped to
/// `0..=100`, so the score depends only on the multiset of severities.
#[must_use]
pub fn risk_score(factors: &[RiskFactor]) -> u8 {
    let penalty: u32 = factors.iter().map(|f| f.severity().penalty()).sum();
    let score = u32::from(MAX_HEALTH_SCORE).saturating_sub(penalty);
    // score <= 100 here
    score as u8
}

/// Coefficient of variation of a price series.
///
/// Population standard deviation divided by the mean. Returns `None` when
/// there are fewer than [`MIN_PRICE_POINTS`] points or any price is
/// negative, and `Some(0.0)` when the mean is zero (every price is zero).
#[must_use]
pub fn volatility(history: &[PricePoint]) -> Option<f64> {
    let negative = history.iter().any(|point| point.price < Decimal::ZERO);
    if history.len() < MIN_PRICE_POINTS || negative {
        return None;
    }

    let prices: Vec<f64> = history
        .iter()
        .map(|point| point.price.to_f64().unwrap_or(0.0))
        .collect();
    let n = prices.len() as f64;
    let mean = prices.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return Some(0.0);
    }

    let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
    Some(variance.sqrt() / mean)
}

/// Price-stability score: `100 - volatility * 100`, clamped and rounded.
///
/// Fewer than two price points yields [`NEUTRAL_STABILITY_SCORE`].
#[must_use]
pub fn price_stability_score(history: &[PricePoint]) -> u8 {
    match volatility(history) {
        Some(volatility) => to_score(100.0 - volatility * 100.0),
        None => NEUTRAL_STABILITY_SCORE,
    }
}

/// Round a raw score and clamp it to `0..=100`.
pub(crate) fn to_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_HEALTH_SCORE)) as u8
}

/// How per-asset health scores are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Risk score alone.
    RiskOnly,
    /// Weighted blend of risk, price stability and liquidity.
    #[default]
    Blended,
}

/// Weights for the blended health score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthWeights {
    pub risk: f64,
    pub price_stability: f64,
    pub liquidity: f64,
}

impl HealthWeights {
    #[must_use]
    pub const fn new(risk: f64, price_stability: f64, liquidity: f64) -> Self {
        Self {
            risk,
            price_stability,
            liquidity,
        }
    }

    /// Weighted sum of the three sub-scores, rounded to the nearest integer.
    #[must_use]
    pub fn blend(&self, risk: u8, price_stability: u8, liquidity: u8) -> u8 {
        to_score(
            f64::from(risk) * self.risk
                + f64::from(price_stability) * self.price_stability
                + f64::from(liquidity) * self.liquidity,
        )
    }
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            risk: 0.4,
            price_stability: 0.3,
            liquidity: 0.3,
        }
    }
}

/// Sub-scores behind one asset's health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    pub risk: u8,
    pub price_stability: u8,
    pub liquidity: u8,
    pub health: u8,
}

/// Computes health scores for NFTs.
///
/// Holds only configuration; scoring takes `&self` and never mutates the
/// scorer, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct HealthScorer<L = FixedLiquidity> {
    mode: ScoringMode,
    weights: HealthWeights,
    liquidity: L,
}

impl Default for HealthScorer<FixedLiquidity> {
    fn default() -> Self {
        Self::new(ScoringMode::default(), HealthWeights::default())
    }
}

impl HealthScorer<FixedLiquidity> {
    /// Create a scorer using the constant liquidity fallback.
    #[must_use]
    pub fn new(mode: ScoringMode, weights: HealthWeights) -> Self {
        Self {
            mode,
            weights,
            liquidity: FixedLiquidity::default(),
        }
    }

    /// Scorer that uses the risk score alone.
    #[must_use]
    pub fn risk_only() -> Self {
        Self::new(ScoringMode::RiskOnly, HealthWeights::default())
    }
}

impl<L: LiquiditySignal> HealthScorer<L> {
    /// Replace the liquidity signal.
    #[must_use]
    pub fn with_liquidity<M: LiquiditySignal>(self, liquidity: M) -> HealthScorer<M> {
        HealthScorer {
            mode: self.mode,
            weights: self.weights,
            liquidity,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ScoringMode {
        self.mode
    }

    #[must_use]
    pub const fn weights(&self) -> &HealthWeights {
        &self.weights
    }

    /// All sub-scores for an asset plus the resulting health score.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] when the asset has a negative current value
    /// or a negative historical price.
    pub fn breakdown(&self, nft: &Nft) -> Result<HealthBreakdown, DomainError> {
        nft.validate_value()?;
        let risk = risk_score(&nft.risk_factors);
        let price_stability = price_stability_score(&nft.value.historical);
        let liquidity = self.liquidity.score(nft).min(MAX_HEALTH_SCORE);

        let health = match self.mode {
            ScoringMode::RiskOnly => risk,
            ScoringMode::Blended => self.weights.blend(risk, price_stability, liquidity),
        };

        Ok(HealthBreakdown {
            risk,
            price_stability,
            liquidity,
            health,
        })
    }

    /// Health score for a single asset.
    ///
    /// # Errors
    ///
    /// See [`HealthScorer::breakdown`].
    pub fn score(&self, nft: &Nft) -> Result<u8, DomainError> {
        let breakdown = self.breakdown(nft)?;
        debug!(
            nft_id = %nft.id,
            risk = breakdown.risk,
            price_stability = breakdown.price_stability,
            liquidity = breakdown.liquidity,
            health = breakdown.health,
            "Scored NFT"
        );
        Ok(breakdown.health)
    }

    /// Attach a freshly computed health score to every asset.
    ///
    /// # Errors
    ///
    /// Fails on the first asset that [`HealthScorer::breakdown`] rejects.
    pub fn apply(&self, nfts: Vec<Nft>) -> Result<Vec<Nft>, DomainError> {
        nfts.into_iter()
            .map(|nft| {
                let score = self.score(&nft)?;
                Ok(nft.with_health_score(score))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::{RiskKind, Severity};
    use chrono::{DateTime, Duration, Utc};
    use rust_decimal_macros::dec;

    fn factor(severity: Severity) -> RiskFactor {
        RiskFactor::new(
            RiskKind::SuspiciousActivity,
            severity,
            "flagged",
            DateTime::<Utc>::UNIX_EPOCH,
        )
    }

    fn history(prices: &[Decimal]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(day, price)| {
                PricePoint::new(
                    DateTime::<Utc>::UNIX_EPOCH + Duration::days(day as i64),
                    *price,
                )
            })
            .collect()
    }

    #[test]
    fn risk_score_without_factors_is_perfect() {
        assert_eq!(risk_score(&[]), 100);
    }

    #[test]
    fn risk_score_deducts_by_severity() {
        assert_eq!(risk_score(&[factor(Severity::Low)]), 95);
        assert_eq!(
            risk_score(&[factor(Severity::Medium), factor(Severity::Medium)]),
            70
        );
        assert_eq!(risk_score(&[factor(Severity::High)]), 70);
    }

    #[test]
    fn risk_score_clamps_at_zero() {
        let factors = vec![factor(Severity::High); 4];
        assert_eq!(risk_score(&factors), 0);

        let many = vec![factor(Severity::High); 50];
        assert_eq!(risk_score(&many), 0);
    }

    #[test]
    fn risk_score_ignores_order() {
        let a = vec![factor(Severity::Low), factor(Severity::High)];
        let b = vec![factor(Severity::High), factor(Severity::Low)];
        assert_eq!(risk_score(&a), risk_score(&b));
        assert_eq!(risk_score(&a), 65);
    }

    #[test]
    fn stability_of_flat_series_is_perfect() {
        assert_eq!(
            price_stability_score(&history(&[dec!(100), dec!(100), dec!(100)])),
            100
        );
    }

    #[test]
    fn stability_with_insufficient_data_is_neutral() {
        assert_eq!(price_stability_score(&[]), 50);
        assert_eq!(price_stability_score(&history(&[dec!(3)])), 50);
        assert_eq!(volatility(&history(&[dec!(3)])), None);
    }

    #[test]
    fn stability_of_all_zero_series_is_perfect() {
        assert_eq!(price_stability_score(&history(&[dec!(0), dec!(0)])), 100);
    }

    #[test]
    fn stability_uses_population_deviation() {
        // mean 10, population std dev 5 => volatility 0.5 => score 50
        let points = history(&[dec!(5), dec!(15)]);
        let vol = volatility(&points).unwrap();
        assert!((vol - 0.5).abs() < 1e-12);
        assert_eq!(price_stability_score(&points), 50);
    }

    #[test]
    fn stability_clamps_extreme_volatility() {
        // mean 25, std dev ~43.3 => volatility ~1.73 => clamped to 0
        let points = history(&[dec!(0), dec!(0), dec!(0), dec!(100)]);
        assert_eq!(price_stability_score(&points), 0);
    }

    #[test]
    fn blended_score_uses_default_weights() {
        let nft = Nft::new("a", "col", dec!(1))
            .with_risk_factors(vec![factor(Severity::Medium)])
            .with_history(history(&[dec!(2), dec!(2)]));

        // 0.4 * 85 + 0.3 * 100 + 0.3 * 70 = 34 + 30 + 21 = 85
        let breakdown = HealthScorer::default().breakdown(&nft).unwrap();
        assert_eq!(breakdown.risk, 85);
        assert_eq!(breakdown.price_stability, 100);
        assert_eq!(breakdown.liquidity, 70);
        assert_eq!(breakdown.health, 85);
    }

    #[test]
    fn risk_only_mode_ignores_other_signals() {
        let nft = Nft::new("a", "col", dec!(1)).with_risk_factors(vec![factor(Severity::Low)]);
        assert_eq!(HealthScorer::risk_only().score(&nft).unwrap(), 95);
    }

    #[test]
    fn custom_liquidity_signal_is_used() {
        let scorer = HealthScorer::default().with_liquidity(|_: &Nft| -> u8 { 100 });
        let nft = Nft::new("a", "col", dec!(1));
        // 40 + 15 + 30
        assert_eq!(scorer.score(&nft).unwrap(), 85);
    }

    #[test]
    fn liquidity_above_range_is_clamped() {
        let scorer = HealthScorer::default().with_liquidity(FixedLiquidity(250));
        let nft = Nft::new("a", "col", dec!(1));
        assert_eq!(scorer.breakdown(&nft).unwrap().liquidity, 100);
    }

    #[test]
    fn apply_overwrites_supplied_scores() {
        let nfts = vec![
            Nft::new("a", "col", dec!(1)).with_health_score(3),
            Nft::new("b", "col", dec!(1))
                .with_health_score(99)
                .with_risk_factors(vec![factor(Severity::High); 4]),
        ];
        let scored = HealthScorer::risk_only().apply(nfts).unwrap();
        assert_eq!(scored[0].health_score, 100);
        assert_eq!(scored[1].health_score, 0);
    }

    #[test]
    fn negative_history_is_rejected() {
        let nft = Nft::new("a", "col", dec!(1)).with_history(history(&[dec!(-5), dec!(1)]));
        assert!(matches!(
            HealthScorer::default().score(&nft),
            Err(DomainError::NegativePrice { .. })
        ));
        assert_eq!(volatility(&nft.value.historical), None);
    }

    #[test]
    fn negative_current_value_is_rejected() {
        let nfts = vec![
            Nft::new("a", "col", dec!(1)),
            Nft::new("b", "col", dec!(-1)),
        ];
        assert!(matches!(
            HealthScorer::risk_only().apply(nfts),
            Err(DomainError::NegativeValue { .. })
        ));
    }

    #[test]
    fn scorer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HealthScorer>();
    }

    #[test]
    fn scores_stay_in_range() {
        let weights = HealthWeights::new(1.0, 1.0, 1.0);
        assert_eq!(weights.blend(100, 100, 100), 100);
        assert_eq!(to_score(-12.0), 0);
        assert_eq!(to_score(f64::NAN), 0);
    }
}
