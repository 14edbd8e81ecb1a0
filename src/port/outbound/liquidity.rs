//! Liquidity signal port.
//!
//! Liquidity (trading volume, holder count, time between trades) is not
//! available from the NFT data the engine receives. The blended health score
//! therefore takes its liquidity component from a [`LiquiditySignal`], and
//! ships [`FixedLiquidity`] as the fallback until real liquidity data exists.

use crate::domain::nft::Nft;

/// Liquidity score used when no liquidity data source is configured.
pub const DEFAULT_LIQUIDITY_SCORE: u8 = 70;

/// Source of the liquidity component of an NFT's health score.
///
/// Implementations must return a value in `0..=100`; larger values are
/// clamped by the scorer.
pub trait LiquiditySignal: Send + Sync {
    /// Liquidity score for a single asset.
    fn score(&self, nft: &Nft) -> u8;
}

/// Constant liquidity score for every asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLiquidity(pub u8);

impl Default for FixedLiquidity {
    fn default() -> Self {
        Self(DEFAULT_LIQUIDITY_SCORE)
    }
}

impl LiquiditySignal for FixedLiquidity {
    fn score(&self, _nft: &Nft) -> u8 {
        self.0
    }
}

impl<F> LiquiditySignal for F
where
    F: Fn(&Nft) -> u8 + Send + Sync,
{
    fn score(&self, nft: &Nft) -> u8 {
        self(nft)
    }
}
