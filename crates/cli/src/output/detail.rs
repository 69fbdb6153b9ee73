//! Detailed output formatting for a single vault's allocation.

use colored::Colorize;
use curator_rs_allocation::{CuratorVault, RebalanceMetrics};
use curator_rs_api::format::{format_currency, format_percentage};

use super::table::format_orders_table;

pub fn format_vault_allocation(vault: &CuratorVault, metrics: &RebalanceMetrics) -> String {
    let mut output = String::new();

    // Header
    output.push_str(&format!("{}\n", "=".repeat(60)));
    output.push_str(&format!("{}\n", vault.name.bold()));
    output.push_str(&format!("{}\n\n", "=".repeat(60)));

    output.push_str(&format!("{}\n", "Vault".cyan().bold()));
    output.push_str(&format!("  Address:          {}\n", vault.address));
    output.push_str(&format!("  Status:           {}\n", vault.status));
    let total = format_percentage(vault.total_allocation(), 2);
    if vault.is_over_allocated() {
        output.push_str(&format!(
            "  Total Allocation: {} {}\n\n",
            total,
            "(over-allocated)".red()
        ));
    } else {
        output.push_str(&format!("  Total Allocation: {}\n\n", total));
    }

    output.push_str(&format!("{}\n", "Metrics".cyan().bold()));
    output.push_str(&format!(
        "  Total Value:      {}\n",
        format_currency(metrics.total_vault_value)
    ));
    output.push_str(&format!(
        "  Allocated:        {}\n",
        format_currency(metrics.allocated_value)
    ));
    output.push_str(&format!(
        "  Unallocated:      {}\n",
        format_currency(metrics.unallocated_value)
    ));
    output.push_str(&format!(
        "  Average APY:      {}\n",
        format_percentage(metrics.average_apy, 2)
    ));
    output.push_str(&format!(
        "  Normalized APY:   {}\n\n",
        format_percentage(metrics.normalized_apy, 2)
    ));

    output.push_str(&format!("{}\n", "Orders".cyan().bold()));
    output.push_str(&format_orders_table(&vault.orders));

    output
}
