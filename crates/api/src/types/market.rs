//! Market configuration types returned by `/market/config/list`.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload, absent on some error responses.
    pub data: Option<T>,
    /// Server-provided message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

/// Full market configuration for one chain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfigList {
    /// Lending markets.
    #[serde(default)]
    pub markets: Vec<MarketConfig>,
    /// Token metadata for the assets the markets reference.
    #[serde(default)]
    pub asset_configs: Vec<AssetConfig>,
    /// Gearing token (collateral position) configurations.
    #[serde(default)]
    pub gt_configs: Vec<GtConfig>,
    /// Chain-wide settings.
    #[serde(default)]
    pub global_config: GlobalConfig,
}

impl MarketConfigList {
    /// Look up asset metadata by token address.
    pub fn asset(&self, address: Address) -> Option<&AssetConfig> {
        self.asset_configs.iter().find(|a| a.address == address)
    }

    /// Look up the gearing token configuration for a market.
    pub fn gt_for_market(&self, market: Address) -> Option<&GtConfig> {
        self.gt_configs.iter().find(|g| g.market == market)
    }
}

/// Configuration of a single fixed-term lending market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketConfig {
    /// Market contract address.
    pub address: Address,
    /// Display name.
    pub name: String,
    /// Market symbol, if the API provides one.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Token lent and borrowed in this market.
    pub underlying: Address,
    /// Token posted as collateral.
    #[serde(default)]
    pub collateral: Option<Address>,
    /// Maturity of the market, as a unix timestamp on the wire.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub maturity: Option<DateTime<Utc>>,
    /// Current lend APR, in percent.
    #[serde(default)]
    pub lend_apr: Option<f64>,
    /// Current borrow APR, in percent.
    #[serde(default)]
    pub borrow_apr: Option<f64>,
    /// Total value locked, in USD.
    #[serde(default)]
    pub tvl: f64,
    /// Curator managing the market's vault, if any.
    #[serde(default)]
    pub curator: Option<Address>,
}

/// Token metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    /// Token contract address.
    pub address: Address,
    /// Token symbol (e.g., "USDC").
    pub symbol: String,
    /// Token name (e.g., "USD Coin").
    #[serde(default)]
    pub name: Option<String>,
    /// Token decimals.
    pub decimals: u8,
    /// Current price in USD.
    #[serde(default)]
    pub price_usd: Option<f64>,
}

/// Gearing token configuration for a market's collateral positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GtConfig {
    /// Gearing token address.
    pub address: Address,
    /// Market the token belongs to.
    pub market: Address,
    /// Maximum loan-to-value when opening a position.
    #[serde(default)]
    pub max_ltv: Option<f64>,
    /// Loan-to-value at which a position is liquidated.
    #[serde(default)]
    pub liquidation_ltv: Option<f64>,
}

/// Chain-wide configuration.
///
/// Only the fields used here are typed; everything else is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Treasury receiving protocol fees.
    #[serde(default)]
    pub treasurer: Option<Address>,
    /// Remaining untyped fields.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
