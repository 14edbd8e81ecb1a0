//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌───────────┐                                       ┌─────────────┐
//! │ NftSource │                                       │  Liquidity  │
//! │  Adapter  │                                       │   Signal    │
//! └───────────┘                                       └─────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`NftSource`] - NFT data and risk analysis (HTTP API, JSON file)
//! - [`LiquiditySignal`] - Liquidity component of the blended health score

pub mod outbound;

pub use outbound::liquidity::{FixedLiquidity, LiquiditySignal, DEFAULT_LIQUIDITY_SCORE};
pub use outbound::source::NftSource;
