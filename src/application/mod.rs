//! Application services (use cases).
//!
//! Pure scoring logic over domain values. Nothing here performs I/O.

pub mod portfolio;
pub mod scoring;
pub mod verification;

pub use portfolio::{DistributionPolicy, PortfolioAnalyzer, PortfolioWeights};
pub use scoring::{
    price_stability_score, risk_score, HealthBreakdown, HealthScorer, HealthWeights, ScoringMode,
};
pub use verification::{verify, Verification};
