//! Order and metrics types for vault allocation.

use serde::{Deserialize, Serialize};

/// Kind of position an order takes in its market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Supplies liquidity to lenders.
    Lend,
    /// Supplies liquidity to borrowers.
    Borrow,
    /// Quotes both sides of the market.
    TwoWay,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Lend => write!(f, "Lend"),
            OrderType::Borrow => write!(f, "Borrow"),
            OrderType::TwoWay => write!(f, "TwoWay"),
        }
    }
}

/// One allocation line item inside a vault.
///
/// `allocated_amount` is derived from `allocation_percentage` and the vault's
/// total value. The percentage is the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultOrder {
    /// Order identifier, stable across recalculations.
    pub id: String,
    /// Side of the market this order quotes.
    pub order_type: OrderType,
    /// Share of the vault value, in percent (0 to 100).
    pub allocation_percentage: f64,
    /// Vault value currently assigned to this order.
    #[serde(default)]
    pub allocated_amount: f64,
    /// Annualized borrow rate, if known.
    #[serde(default, rename = "borrowAPRRaw")]
    pub borrow_apr_raw: Option<f64>,
    /// Annualized lend rate, if known.
    #[serde(default, rename = "lendAPRRaw")]
    pub lend_apr_raw: Option<f64>,
    /// Informational capacity ceiling. Not enforced by the allocation math.
    #[serde(default)]
    pub max_capacity: f64,
    /// Display name of the underlying market.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_name: Option<String>,
    /// Loan-to-value ratio of the underlying market.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ltv: Option<f64>,
}

impl VaultOrder {
    /// Create an order with no rates, capacity or allocation yet.
    pub fn new(id: impl Into<String>, order_type: OrderType) -> Self {
        Self {
            id: id.into(),
            order_type,
            allocation_percentage: 0.0,
            allocated_amount: 0.0,
            borrow_apr_raw: None,
            lend_apr_raw: None,
            max_capacity: 0.0,
            market_name: None,
            ltv: None,
        }
    }

    /// Set the allocation percentage.
    pub fn with_allocation(mut self, percentage: f64) -> Self {
        self.allocation_percentage = percentage;
        self
    }

    /// Set the lend rate.
    pub fn with_lend_apr(mut self, apr: f64) -> Self {
        self.lend_apr_raw = Some(apr);
        self
    }

    /// Set the borrow rate.
    pub fn with_borrow_apr(mut self, apr: f64) -> Self {
        self.borrow_apr_raw = Some(apr);
        self
    }

    /// Set the informational capacity ceiling.
    pub fn with_max_capacity(mut self, capacity: f64) -> Self {
        self.max_capacity = capacity;
        self
    }

    /// APY this order contributes, with unknown rates counted as zero.
    ///
    /// Two-way orders earn the mean of both sides.
    pub fn effective_apy(&self) -> f64 {
        let lend = self.lend_apr_raw.unwrap_or(0.0);
        let borrow = self.borrow_apr_raw.unwrap_or(0.0);
        match self.order_type {
            OrderType::Lend => lend,
            OrderType::Borrow => borrow,
            OrderType::TwoWay => (lend + borrow) / 2.0,
        }
    }

    /// Whether the order has no rate data for the side(s) it quotes.
    pub fn has_unknown_rate(&self) -> bool {
        match self.order_type {
            OrderType::Lend => self.lend_apr_raw.is_none(),
            OrderType::Borrow => self.borrow_apr_raw.is_none(),
            OrderType::TwoWay => self.lend_apr_raw.is_none() || self.borrow_apr_raw.is_none(),
        }
    }
}

/// Vault-level snapshot of how value is distributed across orders.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceMetrics {
    /// Value under management.
    pub total_vault_value: f64,
    /// Value assigned to orders.
    pub allocated_value: f64,
    /// Residual `total_vault_value - allocated_value`.
    pub unallocated_value: f64,
    /// Percentage-weighted APY contribution sum.
    ///
    /// Equals the weighted average only when allocations total exactly 100%.
    #[serde(rename = "averageAPY")]
    pub average_apy: f64,
    /// APY averaged over the allocated share only.
    #[serde(default, rename = "normalizedAPY")]
    pub normalized_apy: f64,
}

impl RebalanceMetrics {
    /// Snapshot of a vault with nothing allocated.
    pub fn unallocated(total_vault_value: f64) -> Self {
        Self {
            total_vault_value,
            allocated_value: 0.0,
            unallocated_value: total_vault_value,
            average_apy: 0.0,
            normalized_apy: 0.0,
        }
    }
}
