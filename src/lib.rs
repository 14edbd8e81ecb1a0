//! nftsentry - NFT portfolio health and risk scoring.
//!
//! Scores individual NFTs from their flagged risk factors and price history,
//! then summarizes a wallet into an overall health score, a risk
//! distribution, its total value and its top performers.
//!
//! # Architecture
//!
//! - [`domain`] - NFT, risk factor and portfolio types plus input validation
//! - [`application`] - pure scoring: per-asset health, portfolio summary,
//!   authenticity verdicts
//! - [`port`] - traits at the I/O seams (NFT data source, liquidity signal)
//! - [`adapter`] - bitsCrunch REST client, JSON file source and the CLI
//! - [`infrastructure`] - TOML configuration and logging setup
//! - [`error`] - crate error types
//!
//! # Example
//!
//! ```
//! use nftsentry::application::{HealthScorer, PortfolioAnalyzer};
//! use nftsentry::domain::Nft;
//! use rust_decimal_macros::dec;
//!
//! let nfts = HealthScorer::risk_only().apply(vec![
//!     Nft::new("a", "Apes", dec!(1.5)),
//!     Nft::new("b", "Punks", dec!(0.5)),
//! ])?;
//! let health = PortfolioAnalyzer::default().analyze(&nfts)?;
//! assert_eq!(health.total_value, dec!(2.0));
//! # Ok::<(), nftsentry::domain::error::DomainError>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
