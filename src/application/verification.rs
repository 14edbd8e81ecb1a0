//! Authenticity verification verdicts for single NFTs.
//!
//! A verdict is coarser than the health score: every flagged risk factor
//! costs a flat 20 points regardless of severity, and the result is not
//! clamped, so a heavily flagged token can score below zero.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::risk::RiskFactor;

/// Points deducted per flagged risk factor.
pub const PENALTY_PER_FACTOR: i32 = 20;

/// Lowest score that still counts as verified.
pub const VERIFIED_THRESHOLD: i32 = 70;

/// Outcome of verifying one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub is_verified: bool,
    pub score: i32,
    pub risk_factors: Vec<RiskFactor>,
    pub timestamp: DateTime<Utc>,
}

/// Build a verdict from the risk factors detected for a token.
#[must_use]
pub fn verify(risk_factors: Vec<RiskFactor>, checked_at: DateTime<Utc>) -> Verification {
    let flagged = i32::try_from(risk_factors.len()).unwrap_or(i32::MAX);
    let score = 100_i32.saturating_sub(flagged.saturating_mul(PENALTY_PER_FACTOR));

    Verification {
        is_verified: score >= VERIFIED_THRESHOLD,
        score,
        risk_factors,
        timestamp: checked_at,
    }
}
