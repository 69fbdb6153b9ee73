//! Display-oriented vault read model.

use std::collections::HashMap;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chain::chain_serde;
use super::market::{MarketConfig, MarketConfigList};

/// Vault row as listed to users.
///
/// Built from upstream market configuration and replaced wholesale on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    /// Stable identifier (`<chain id>-<address>`).
    pub id: String,
    /// Contract address.
    pub address: Address,
    /// Display name.
    pub name: String,
    /// Symbol, usually the underlying token's.
    pub symbol: String,
    /// Total value locked, in USD.
    pub tvl: f64,
    /// Current APY, in percent.
    pub apy: f64,
    /// Loan-to-value ratio, if known.
    pub ltv: Option<f64>,
    /// The connected user's position in this vault; 0 if none.
    #[serde(default)]
    pub user_position: f64,
    /// Chain the vault is deployed on.
    #[serde(with = "chain_serde")]
    pub chain: NamedChain,
    /// Market maturity, if the vault is fixed-term.
    #[serde(default)]
    pub maturity: Option<DateTime<Utc>>,
    /// Curator address, if any.
    #[serde(default)]
    pub curator: Option<Address>,
}

impl Vault {
    /// Create a vault from a market entry and the list it came from.
    ///
    /// The symbol falls back to the underlying asset's symbol, then to the
    /// market name. LTV comes from the market's gearing token configuration.
    pub fn from_market(market: &MarketConfig, list: &MarketConfigList, chain: NamedChain) -> Self {
        let symbol = market
            .symbol
            .clone()
            .or_else(|| list.asset(market.underlying).map(|a| a.symbol.clone()))
            .unwrap_or_else(|| market.name.clone());

        let ltv = list.gt_for_market(market.address).and_then(|gt| gt.max_ltv);

        Vault {
            id: format!("{}-{}", u64::from(chain), market.address),
            address: market.address,
            name: market.name.clone(),
            symbol,
            tvl: market.tvl,
            apy: market.lend_apr.unwrap_or(0.0),
            ltv,
            user_position: 0.0,
            chain,
            maturity: market.maturity,
            curator: market.curator,
        }
    }

    /// Convert every market in a configuration list.
    pub fn from_market_list(list: &MarketConfigList, chain: NamedChain) -> Vec<Self> {
        list.markets
            .iter()
            .map(|m| Vault::from_market(m, list, chain))
            .collect()
    }

    /// Whether the user holds a position in this vault.
    pub fn has_position(&self) -> bool {
        self.user_position > 0.0
    }
}

/// Set each vault's `user_position` from a map of vault address to amount.
///
/// Vaults missing from the map are reset to 0.
pub fn apply_user_positions(vaults: &mut [Vault], positions: &HashMap<Address, f64>) {
    for vault in vaults.iter_mut() {
        vault.user_position = positions.get(&vault.address).copied().unwrap_or(0.0);
    }
}

/// Outcome of loading the vault list.
///
/// Loading never fails outright: on error the list is empty and `error`
/// carries a message suitable for display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VaultListing {
    /// Loaded vaults.
    pub vaults: Vec<Vault>,
    /// Display message when loading failed.
    pub error: Option<String>,
}

impl VaultListing {
    /// Successful listing.
    pub fn loaded(vaults: Vec<Vault>) -> Self {
        Self {
            vaults,
            error: None,
        }
    }

    /// Failed listing with an empty vault list.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            vaults: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Whether loading failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
