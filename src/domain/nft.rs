//! NFT records as consumed by the scoring engine.
//!
//! Values are held as [`Decimal`] and serialized as plain JSON numbers, so the
//! wire shape matches what front-ends expect (`"current": 1.5`, not `"1.5"`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::NftId;
use super::risk::RiskFactor;

/// Highest health score an asset can carry.
pub const MAX_HEALTH_SCORE: u8 = 100;

/// One observed price for an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl PricePoint {
    #[must_use]
    pub const fn new(date: DateTime<Utc>, price: Decimal) -> Self {
        Self { date, price }
    }
}

/// Current and historical value of an asset.
///
/// `historical` is kept in the order the provider returned it; volatility is
/// computed over that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftValue {
    #[serde(with = "rust_decimal::serde::float")]
    pub current: Decimal,
    #[serde(default)]
    pub historical: Vec<PricePoint>,
}

/// A wallet-held NFT with its risk data and derived health score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: NftId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub collection: String,
    #[serde(default)]
    pub token_id: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub owner: String,
    /// Derived by the scorer, never taken from the provider.
    #[serde(default)]
    pub health_score: u8,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    pub value: NftValue,
}

impl Nft {
    /// Create an NFT with the given identity and current value.
    ///
    /// Metadata fields start empty, there are no risk factors and no price
    /// history, and the health score is 0 until a scorer assigns one.
    pub fn new(id: impl Into<NftId>, collection: impl Into<String>, current: Decimal) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            image: String::new(),
            collection: collection.into(),
            token_id: String::new(),
            contract_address: String::new(),
            owner: String::new(),
            health_score: 0,
            risk_factors: Vec::new(),
            value: NftValue {
                current,
                historical: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_health_score(mut self, score: u8) -> Self {
        self.health_score = score;
        self
    }

    #[must_use]
    pub fn with_risk_factors(mut self, factors: Vec<RiskFactor>) -> Self {
        self.risk_factors = factors;
        self
    }

    #[must_use]
    pub fn with_history(mut self, historical: Vec<PricePoint>) -> Self {
        self.value.historical = historical;
        self
    }

    /// Historical prices in provider order.
    pub fn prices(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.value.historical.iter().map(|point| point.price)
    }

    /// Check the numeric invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violation found: a negative current value, a
    /// negative historical price, or a health score above 100.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_value()?;
        if self.health_score > MAX_HEALTH_SCORE {
            return Err(DomainError::HealthScoreOutOfRange {
                nft_id: self.id.clone(),
                score: self.health_score,
            });
        }
        Ok(())
    }

    /// Check the current value and price history, ignoring the health score.
    ///
    /// Scoring runs this before computing a fresh score.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeValue`] or [`DomainError::NegativePrice`].
    pub fn validate_value(&self) -> Result<(), DomainError> {
        if self.value.current < Decimal::ZERO {
            return Err(DomainError::NegativeValue {
                nft_id: self.id.clone(),
                value: self.value.current,
            });
        }
        if let Some(price) = self.prices().find(|price| *price < Decimal::ZERO) {
            return Err(DomainError::NegativePrice {
                nft_id: self.id.clone(),
                price,
            });
        }
        Ok(())
    }
}
