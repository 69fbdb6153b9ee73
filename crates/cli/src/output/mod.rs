//! Output formatting for CLI results.

pub mod detail;
pub mod table;

pub use detail::format_vault_allocation;
pub use table::{format_markets_table, format_vaults_table};
