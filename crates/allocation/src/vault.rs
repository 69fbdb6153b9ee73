//! Curator vault aggregate.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::engine::{
    calculate_total_allocation_percentage, calculate_vault_metrics, refresh_allocated_amounts,
    update_order_allocations, FULL_ALLOCATION,
};
use crate::error::{AllocationError, Result};
use crate::order::{RebalanceMetrics, VaultOrder};

/// Lifecycle status of a curator vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VaultStatus {
    #[default]
    Active,
    Paused,
    Closed,
}

impl std::fmt::Display for VaultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultStatus::Active => write!(f, "Active"),
            VaultStatus::Paused => write!(f, "Paused"),
            VaultStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A vault managed by a curator, owning its allocation orders.
///
/// `tvl` is the total vault value the orders' amounts are derived from. Every
/// mutating method keeps `allocated_amount` consistent with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratorVault {
    /// Vault name.
    pub name: String,
    /// Vault contract address.
    pub address: Address,
    /// Lifecycle status.
    #[serde(default)]
    pub status: VaultStatus,
    /// Total value under management.
    pub tvl: f64,
    /// Allocation orders, in display order.
    #[serde(default)]
    pub orders: Vec<VaultOrder>,
}

impl CuratorVault {
    /// Create an empty vault.
    pub fn new(name: impl Into<String>, address: Address, tvl: f64) -> Self {
        Self {
            name: name.into(),
            address,
            status: VaultStatus::Active,
            tvl,
            orders: Vec::new(),
        }
    }

    /// Replace the orders, deriving their amounts from the current TVL.
    pub fn with_orders(mut self, orders: Vec<VaultOrder>) -> Self {
        self.orders = orders;
        refresh_allocated_amounts(&mut self.orders, self.tvl);
        self
    }

    /// Re-derive every order's amount from the current TVL.
    ///
    /// Needed after deserializing, where stored amounts may be stale.
    pub fn refresh_amounts(&mut self) {
        refresh_allocated_amounts(&mut self.orders, self.tvl);
    }

    /// Look up an order by identifier.
    pub fn order(&self, order_id: &str) -> Option<&VaultOrder> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Sum of all allocation percentages.
    pub fn total_allocation(&self) -> f64 {
        calculate_total_allocation_percentage(&self.orders)
    }

    /// Whether the allocations exceed 100%.
    ///
    /// Can hold after [`set_allocation`](Self::set_allocation) when a single
    /// order is set above 100%.
    pub fn is_over_allocated(&self) -> bool {
        self.total_allocation() > FULL_ALLOCATION
    }

    /// Current metrics snapshot.
    pub fn metrics(&self) -> RebalanceMetrics {
        calculate_vault_metrics(
            &self.orders,
            &RebalanceMetrics::unallocated(self.tvl),
            0.0,
            0.0,
        )
    }

    /// Set an order's allocation, shrinking the others if the total exceeds 100%.
    pub fn set_allocation(&mut self, order_id: &str, percentage: f64) -> Result<RebalanceMetrics> {
        if !percentage.is_finite() || percentage < 0.0 {
            return Err(AllocationError::InvalidPercentage {
                order_id: order_id.to_string(),
                percentage,
            });
        }
        if self.order(order_id).is_none() {
            return Err(AllocationError::OrderNotFound(order_id.to_string()));
        }

        self.orders = update_order_allocations(&self.orders, order_id, percentage, self.tvl);
        Ok(self.metrics())
    }

    /// Add value to the vault and rescale every order's amount.
    pub fn deposit(&mut self, amount: f64) -> Result<RebalanceMetrics> {
        validate_amount("deposit", amount)?;
        Ok(self.apply_flow(amount, 0.0))
    }

    /// Remove value from the vault and rescale every order's amount.
    pub fn withdraw(&mut self, amount: f64) -> Result<RebalanceMetrics> {
        validate_amount("withdraw", amount)?;
        if amount > self.tvl {
            return Err(AllocationError::WithdrawExceedsValue {
                amount,
                available: self.tvl,
            });
        }
        Ok(self.apply_flow(0.0, amount))
    }

    fn apply_flow(&mut self, deposit: f64, withdraw: f64) -> RebalanceMetrics {
        let metrics = calculate_vault_metrics(&self.orders, &self.metrics(), deposit, withdraw);
        self.tvl = metrics.total_vault_value;
        refresh_allocated_amounts(&mut self.orders, self.tvl);
        metrics
    }
}

fn validate_amount(operation: &'static str, amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(AllocationError::InvalidAmount { operation, amount })
    }
}
