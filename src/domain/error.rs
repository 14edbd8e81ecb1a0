//! Validation errors for NFT records entering the scoring engine.
//!
//! The engine rejects malformed numeric input instead of normalizing it. These
//! errors are returned by [`Nft::validate`](super::nft::Nft::validate) and by
//! portfolio analysis before any aggregate is computed.
//!
//! # Examples
//!
//! ```
//! use nftsentry::domain::error::DomainError;
//! use nftsentry::domain::nft::Nft;
//! use rust_decimal_macros::dec;
//!
//! let nft = Nft::new("nft-1", "Collection", dec!(-2));
//! assert!(matches!(nft.validate(), Err(DomainError::NegativeValue { .. })));
//! ```

use thiserror::Error;

use super::id::NftId;

/// Errors that occur when NFT data violates the engine's numeric contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Current value must not be negative.
    #[error("NFT {nft_id} has negative current value {value}")]
    NegativeValue {
        /// The offending asset.
        nft_id: NftId,
        /// The invalid value that was provided.
        value: rust_decimal::Decimal,
    },

    /// Historical prices must not be negative.
    #[error("NFT {nft_id} has negative historical price {price}")]
    NegativePrice {
        /// The offending asset.
        nft_id: NftId,
        /// The first negative price found.
        price: rust_decimal::Decimal,
    },

    /// Health scores live in 0..=100.
    #[error("NFT {nft_id} has health score {score}, expected 0-100")]
    HealthScoreOutOfRange {
        /// The offending asset.
        nft_id: NftId,
        /// The out-of-range score.
        score: u8,
    },

    /// The summed current values do not fit in a `Decimal`.
    #[error("total value of {assets} NFTs overflows")]
    TotalValueOverflow {
        /// Number of assets being summed.
        assets: usize,
    },
}
