//! Chain helpers for the networks markets are deployed on.
//!
//! Chains are represented by `alloy_chains::NamedChain`, re-exported from the
//! crate root.

use std::str::FromStr;

use alloy_chains::NamedChain;

/// Mainnet chains the market configuration API serves.
pub const SUPPORTED_CHAINS: &[NamedChain] = &[
    NamedChain::Mainnet,
    NamedChain::Arbitrum,
    NamedChain::BinanceSmartChain,
    NamedChain::Base,
];

/// Try to create a NamedChain from a chain ID.
pub fn chain_from_id(id: i64) -> Option<NamedChain> {
    u64::try_from(id)
        .ok()
        .and_then(|id| NamedChain::try_from(id).ok())
}

/// Numeric chain ID as sent in `chainId` query parameters.
pub fn chain_id(chain: NamedChain) -> u64 {
    u64::from(chain)
}

/// Parse a chain from a user-supplied name, alias or numeric ID.
///
/// Matching is case-insensitive. Common aliases (`ethereum`, `eth`, `arb`,
/// `bnb`) are accepted on top of the canonical `alloy_chains` names.
pub fn parse_chain(s: &str) -> Option<NamedChain> {
    let lower = s.trim().to_lowercase();
    let chain = match lower.as_str() {
        "ethereum" | "eth" | "mainnet" => NamedChain::Mainnet,
        "arbitrum" | "arb" => NamedChain::Arbitrum,
        "bnb" | "bsc" | "binance" => NamedChain::BinanceSmartChain,
        "base" => NamedChain::Base,
        other => {
            if let Ok(id) = other.parse::<i64>() {
                return chain_from_id(id);
            }
            return NamedChain::from_str(other).ok();
        }
    };
    Some(chain)
}

/// Serde helper for serializing NamedChain as its numeric chain ID.
///
/// # Example
///
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct Market {
///     #[serde(with = "chain_serde")]
///     chain: NamedChain,
/// }
/// ```
pub mod chain_serde {
    use alloy_chains::NamedChain;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(chain: &NamedChain, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(u64::from(*chain))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NamedChain, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        NamedChain::try_from(id)
            .map_err(|_| serde::de::Error::custom(format!("Unknown chain ID: {}", id)))
    }
}
