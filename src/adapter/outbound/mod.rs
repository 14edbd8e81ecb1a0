//! Outbound adapters (driven side).

pub mod bitscrunch;
pub mod file;
