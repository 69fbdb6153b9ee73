//! Capital allocation engine for curator vaults.
//!
//! A curator vault spreads its total value across lend, borrow and two-way
//! orders by percentage. This crate derives order amounts from those
//! percentages, renormalizes them when an edit pushes the total above 100%,
//! and summarizes the vault as [`RebalanceMetrics`].
//!
//! The math lives in [`engine`] as pure functions over plain data.
//! [`CuratorVault`] wraps it with input validation for callers that own a
//! vault's state.
//!
//! # Example
//!
//! ```
//! use alloy_primitives::Address;
//! use curator_rs_allocation::{CuratorVault, OrderType, VaultOrder};
//!
//! # fn main() -> Result<(), curator_rs_allocation::AllocationError> {
//! let mut vault = CuratorVault::new("USDC Prime", Address::ZERO, 10_000.0).with_orders(vec![
//!     VaultOrder::new("lend", OrderType::Lend).with_lend_apr(8.0).with_allocation(70.0),
//!     VaultOrder::new("borrow", OrderType::Borrow).with_borrow_apr(12.0).with_allocation(30.0),
//! ]);
//!
//! let metrics = vault.deposit(5_000.0)?;
//! assert_eq!(metrics.total_vault_value, 15_000.0);
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
mod order;
mod vault;

pub use engine::{
    calculate_allocation_amount, calculate_normalized_average_apy,
    calculate_total_allocation_percentage, calculate_vault_metrics,
    calculate_weighted_average_apy, refresh_allocated_amounts, update_order_allocations,
    FULL_ALLOCATION,
};
pub use error::{AllocationError, Result};
pub use order::{OrderType, RebalanceMetrics, VaultOrder};
pub use vault::{CuratorVault, VaultStatus};
