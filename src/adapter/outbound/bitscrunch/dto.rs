//! Raw bitsCrunch API payloads and their mapping to domain types.
//!
//! The provider uses snake_case fields, lowercase enum strings and leaves most
//! fields optional. Mapping fills documented defaults instead of failing:
//!
//! | Field | Default |
//! |-------|---------|
//! | `id` | `{contract_address}-{token_id}` |
//! | `name` | `Unnamed NFT` |
//! | `image_url` | empty |
//! | `collection_name` | `Unknown Collection` |
//! | `current_price` | 0 |
//! | `price_history`, `risk_analysis` | empty |
//! | risk `type` | `SUSPICIOUS_ACTIVITY` when unrecognized |
//! | risk `severity` | `MEDIUM` when unrecognized |
//! | timestamps | Unix epoch when missing or unparseable |

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::scoring::risk_score;
use crate::domain::id::NftId;
use crate::domain::nft::{Nft, NftValue, PricePoint};
use crate::domain::risk::{RiskFactor, RiskKind, Severity};

pub const UNNAMED_NFT: &str = "Unnamed NFT";
pub const UNKNOWN_COLLECTION: &str = "Unknown Collection";

/// Timestamp as sent by the provider: epoch milliseconds or a date string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    Text(String),
}

impl RawTimestamp {
    fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .ok(),
        }
    }
}

fn timestamp_or_epoch(raw: Option<&RawTimestamp>) -> DateTime<Utc> {
    match raw {
        None => DateTime::<Utc>::UNIX_EPOCH,
        Some(raw) => raw.to_datetime().unwrap_or_else(|| {
            warn!(timestamp = ?raw, "Unparseable timestamp, using epoch");
            DateTime::<Utc>::UNIX_EPOCH
        }),
    }
}

fn decimal_or_zero(value: Option<f64>) -> Decimal {
    let Some(value) = value else {
        return Decimal::ZERO;
    };
    Decimal::from_f64(value).unwrap_or_else(|| {
        warn!(price = value, "Price not representable as decimal, using zero");
        Decimal::ZERO
    })
}

/// One risk finding as returned by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawRisk {
    #[serde(rename = "type", default)]
    pub risk_type: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detected_at: Option<RawTimestamp>,
}

/// Map a provider risk type string to a [`RiskKind`].
#[must_use]
pub fn map_risk_kind(raw: &str) -> RiskKind {
    match raw.to_ascii_lowercase().as_str() {
        "duplicate" => RiskKind::Duplicate,
        "copyright" => RiskKind::Copyright,
        "wash_trading" => RiskKind::WashTrading,
        _ => RiskKind::SuspiciousActivity,
    }
}

/// Map a provider severity string to a [`Severity`].
#[must_use]
pub fn map_severity(raw: &str) -> Severity {
    match raw.to_ascii_lowercase().as_str() {
        "high" => Severity::High,
        "low" => Severity::Low,
        _ => Severity::Medium,
    }
}

impl From<RawRisk> for RiskFactor {
    fn from(raw: RawRisk) -> Self {
        RiskFactor::new(
            map_risk_kind(&raw.risk_type),
            map_severity(&raw.severity),
            raw.description.unwrap_or_default(),
            timestamp_or_epoch(raw.detected_at.as_ref()),
        )
    }
}

/// One historical price as returned by the provider.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawPricePoint {
    #[serde(default)]
    pub timestamp: Option<RawTimestamp>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl From<RawPricePoint> for PricePoint {
    fn from(raw: RawPricePoint) -> Self {
        PricePoint::new(
            timestamp_or_epoch(raw.timestamp.as_ref()),
            decimal_or_zero(raw.price),
        )
    }
}

/// One NFT as returned by the wallet endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawNft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default)]
    pub token_id: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_history: Option<Vec<RawPricePoint>>,
    #[serde(default)]
    pub risk_analysis: Option<Vec<RawRisk>>,
}

impl RawNft {
    /// Map to a domain [`Nft`] carrying a risk-only health score.
    #[must_use]
    pub fn into_nft(self) -> Nft {
        let id = match self.id.filter(|id| !id.is_empty()) {
            Some(id) => NftId::new(id),
            None => NftId::from_parts(&self.contract_address, &self.token_id),
        };
        let risk_factors: Vec<RiskFactor> = self
            .risk_analysis
            .unwrap_or_default()
            .into_iter()
            .map(RiskFactor::from)
            .collect();
        let historical = self
            .price_history
            .unwrap_or_default()
            .into_iter()
            .map(PricePoint::from)
            .collect();
        let health_score = risk_score(&risk_factors);

        Nft {
            id,
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNNAMED_NFT.to_string()),
            image: self.image_url.unwrap_or_default(),
            collection: self
                .collection_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_COLLECTION.to_string()),
            token_id: self.token_id,
            contract_address: self.contract_address,
            owner: self.owner.unwrap_or_default(),
            health_score,
            risk_factors,
            value: NftValue {
                current: decimal_or_zero(self.current_price),
                historical,
            },
        }
    }
}

/// Body of the single-token analysis request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest<'a> {
    pub contract_address: &'a str,
    pub token_id: &'a str,
}
