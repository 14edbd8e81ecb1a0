//! Risk factors flagged against an NFT by the upstream data provider.
//!
//! A [`RiskFactor`] is immutable once built. Scoring only looks at its
//! [`Severity`]; the kind, description and detection time are carried through
//! for display and serialization.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a flagged issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskKind {
    Duplicate,
    Copyright,
    WashTrading,
    SuspiciousActivity,
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "duplicate"),
            Self::Copyright => write!(f, "copyright"),
            Self::WashTrading => write!(f, "wash trading"),
            Self::SuspiciousActivity => write!(f, "suspicious activity"),
        }
    }
}

/// Severity of a flagged issue.
///
/// Variants are declared in ascending order so `Ord` ranks `High` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Points deducted from a perfect risk score for one factor of this severity.
    #[must_use]
    pub const fn penalty(self) -> u32 {
        match self {
            Self::High => 30,
            Self::Medium => 15,
            Self::Low => 5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A single flagged issue on an NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    #[serde(rename = "type")]
    kind: RiskKind,
    severity: Severity,
    #[serde(default)]
    description: String,
    detected_at: DateTime<Utc>,
}

impl RiskFactor {
    /// Create a new risk factor.
    pub fn new(
        kind: RiskKind,
        severity: Severity,
        description: impl Into<String>,
        detected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
            detected_at,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> RiskKind {
        self.kind
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }
}

/// Highest severity among `factors`, or `None` when there are none.
#[must_use]
pub fn highest_severity(factors: &[RiskFactor]) -> Option<Severity> {
    factors.iter().map(RiskFactor::severity).max()
}
