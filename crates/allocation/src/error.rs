//! Error types for checked vault operations.

use thiserror::Error;

/// Errors returned by [`CuratorVault`](crate::CuratorVault) operations.
///
/// The free functions in [`engine`](crate::engine) never fail; these errors
/// only come from the checked aggregate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// No order with the given identifier exists in the vault.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Percentage is negative or not a finite number.
    #[error("Invalid allocation percentage {percentage} for order {order_id}")]
    InvalidPercentage { order_id: String, percentage: f64 },

    /// Deposit or withdrawal amount is negative or not a finite number.
    #[error("Invalid {operation} amount: {amount}")]
    InvalidAmount {
        operation: &'static str,
        amount: f64,
    },

    /// Withdrawal larger than the value under management.
    #[error("Withdrawal of {amount} exceeds vault value {available}")]
    WithdrawExceedsValue { amount: f64, available: f64 },
}

/// Result type alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocationError>;
