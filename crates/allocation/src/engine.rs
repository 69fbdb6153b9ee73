//! Allocation math for curator vaults.
//!
//! All functions here are pure and total: they never fail, and out-of-range
//! inputs (negative percentages, withdrawals larger than the vault) propagate
//! arithmetically. Validation belongs to the caller, see
//! [`CuratorVault`](crate::CuratorVault) for a checked wrapper.
//!
//! # Rebalancing
//!
//! When an edit pushes the total allocation above 100%, the excess is taken
//! from every other order in proportion to its current share:
//!
//! ```
//! use curator_rs_allocation::{update_order_allocations, OrderType, VaultOrder};
//!
//! let orders = vec![
//!     VaultOrder::new("a", OrderType::Lend).with_allocation(60.0),
//!     VaultOrder::new("b", OrderType::Borrow).with_allocation(50.0),
//! ];
//!
//! let updated = update_order_allocations(&orders, "a", 60.0, 1000.0);
//! assert_eq!(updated[1].allocation_percentage, 40.0);
//! assert_eq!(updated[1].allocated_amount, 400.0);
//! ```

use log::debug;

use crate::order::{RebalanceMetrics, VaultOrder};

/// Upper bound of the total allocation, in percent.
pub const FULL_ALLOCATION: f64 = 100.0;

/// Value assigned to an order holding `percentage` of `total_value`.
pub fn calculate_allocation_amount(percentage: f64, total_value: f64) -> f64 {
    (percentage / 100.0) * total_value
}

/// Sum of allocation percentages. Zero for no orders.
pub fn calculate_total_allocation_percentage(orders: &[VaultOrder]) -> f64 {
    orders.iter().map(|o| o.allocation_percentage).sum()
}

/// Percentage-weighted APY contribution sum.
///
/// Each order contributes `apy * allocation_percentage / 100`, where the APY
/// is chosen by order type (see [`VaultOrder::effective_apy`]). The sum is not
/// divided by the total allocation, so it is a true weighted average only when
/// allocations total exactly 100%. It under-reports partial allocations and
/// over-reports overshoot. Use [`calculate_normalized_average_apy`] for the
/// average over the allocated share.
pub fn calculate_weighted_average_apy(orders: &[VaultOrder]) -> f64 {
    let total_allocation = calculate_total_allocation_percentage(orders);
    if total_allocation == 0.0 {
        return 0.0;
    }

    orders
        .iter()
        .map(|o| o.effective_apy() * o.allocation_percentage / 100.0)
        .sum()
}

/// APY averaged over the allocated share of the vault.
///
/// Zero when nothing is allocated.
pub fn calculate_normalized_average_apy(orders: &[VaultOrder]) -> f64 {
    let total_allocation = calculate_total_allocation_percentage(orders);
    if total_allocation == 0.0 {
        return 0.0;
    }

    calculate_weighted_average_apy(orders) / (total_allocation / 100.0)
}

/// Recompute every order's `allocated_amount` against `total_value`.
pub fn refresh_allocated_amounts(orders: &mut [VaultOrder], total_value: f64) {
    for order in orders.iter_mut() {
        order.allocated_amount =
            calculate_allocation_amount(order.allocation_percentage, total_value);
    }
}

/// Set one order's allocation and shrink the others if the total exceeds 100%.
///
/// The target order (matched by `order_id`) takes `new_percentage`. If the
/// resulting total is above [`FULL_ALLOCATION`], every other order is reduced
/// by the same factor `excess / total_other`, floored at zero. Relative order
/// of the collection is preserved.
///
/// When the other orders hold nothing (`total_other == 0`), the overshoot is
/// left in place. When the target alone exceeds 100%, the others floor at zero
/// and the total stays above 100%. If no order matches `order_id`, every
/// order counts as "other" for the shrink step. A NaN percentage makes the
/// total NaN, which is not above 100%, so nothing is shrunk.
pub fn update_order_allocations(
    orders: &[VaultOrder],
    order_id: &str,
    new_percentage: f64,
    total_value: f64,
) -> Vec<VaultOrder> {
    let mut updated: Vec<VaultOrder> = orders
        .iter()
        .map(|order| {
            if order.id == order_id {
                VaultOrder {
                    allocation_percentage: new_percentage,
                    allocated_amount: calculate_allocation_amount(new_percentage, total_value),
                    ..order.clone()
                }
            } else {
                order.clone()
            }
        })
        .collect();

    let total_percentage = calculate_total_allocation_percentage(&updated);
    if total_percentage > FULL_ALLOCATION {
        shrink_other_orders(&mut updated, order_id, total_percentage, total_value);

        let remaining = calculate_total_allocation_percentage(&updated);
        if remaining > FULL_ALLOCATION {
            debug!("allocation total {remaining}% still exceeds 100% after rebalancing");
        }
    }

    updated
}

/// Take `total_percentage - 100` from every order other than `order_id`, in
/// proportion to its share. A NaN total never reaches here.
fn shrink_other_orders(
    orders: &mut [VaultOrder],
    order_id: &str,
    total_percentage: f64,
    total_value: f64,
) {
    let excess_percentage = total_percentage - FULL_ALLOCATION;
    let total_other_percentage: f64 = orders
        .iter()
        .filter(|o| o.id != order_id)
        .map(|o| o.allocation_percentage)
        .sum();
    if total_other_percentage <= 0.0 {
        return;
    }

    let reduction_factor = excess_percentage / total_other_percentage;
    for order in orders.iter_mut().filter(|o| o.id != order_id) {
        let old = order.allocation_percentage;
        order.allocation_percentage = (old - old * reduction_factor).max(0.0);
        order.allocated_amount =
            calculate_allocation_amount(order.allocation_percentage, total_value);
    }
}

/// Metrics after applying a deposit and/or withdrawal to `current`.
///
/// The new total is `current.total_vault_value + deposit - withdraw`, with no
/// floor at zero. Allocated value is recomputed from each order's percentage
/// against the new total rather than taken from stored amounts.
pub fn calculate_vault_metrics(
    orders: &[VaultOrder],
    current: &RebalanceMetrics,
    deposit_amount: f64,
    withdraw_amount: f64,
) -> RebalanceMetrics {
    let total_vault_value = current.total_vault_value + deposit_amount - withdraw_amount;

    let allocated_value: f64 = orders
        .iter()
        .map(|o| calculate_allocation_amount(o.allocation_percentage, total_vault_value))
        .sum();

    RebalanceMetrics {
        total_vault_value,
        allocated_value,
        unallocated_value: total_vault_value - allocated_value,
        average_apy: calculate_weighted_average_apy(orders),
        normalized_apy: calculate_normalized_average_apy(orders),
    }
}
