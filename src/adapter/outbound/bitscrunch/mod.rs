//! bitsCrunch NFT analytics adapter.

pub mod client;
pub mod dto;

pub use client::BitscrunchClient;
