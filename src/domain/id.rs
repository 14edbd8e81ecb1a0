//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// NFT identifier - newtype for type safety.
///
/// Upstream payloads either carry an explicit ID or one is derived from the
/// contract address and token ID (see [`NftId::from_parts`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NftId(String);

impl NftId {
    /// Create a new `NftId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an ID of the form `{contract_address}-{token_id}`.
    #[must_use]
    pub fn from_parts(contract_address: &str, token_id: &str) -> Self {
        Self(format!("{contract_address}-{token_id}"))
    }

    /// Get the NFT ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NftId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for NftId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
