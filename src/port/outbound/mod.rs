//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe what the engine needs from the outside world:
//! NFT data and a liquidity signal.

pub mod liquidity;
pub mod source;
