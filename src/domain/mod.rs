//! Provider-agnostic domain types: NFTs, risk factors, portfolio summaries.

pub mod error;
pub mod id;
pub mod nft;
pub mod portfolio;
pub mod risk;

pub use error::DomainError;
pub use id::NftId;
pub use nft::{Nft, NftValue, PricePoint, MAX_HEALTH_SCORE};
pub use portfolio::{HealthBand, PortfolioHealth, RiskDistribution};
pub use risk::{highest_severity, RiskFactor, RiskKind, Severity};
