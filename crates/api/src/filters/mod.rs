//! Client-side filtering and sorting of vault lists.
//!
//! # Architecture
//!
//! - **[`VaultFilter`]**: search term and chain filter, see [`filter_vaults`]
//! - **[`sort_vaults`]**: multi-key sort that pins vaults the user holds
//! - **[`VaultQuery`]**: combines both with an optional result limit
//!
//! # Example
//!
//! ```
//! # use curator_rs_api::*;
//! # fn example(vaults: &[Vault]) {
//! let query = VaultQuery::new()
//!     .filter(VaultFilter::new().search("usdc").chain(ChainFilter::Chain(NamedChain::Arbitrum)))
//!     .sort_by(VaultSortField::Apy)
//!     .direction(SortDirection::Desc)
//!     .limit(10);
//! let displayed = query.apply(vaults);
//! # }
//! ```

pub mod query_options;
pub mod sort;
pub mod vault_filter;

pub use query_options::VaultQuery;
pub use sort::{compare_vaults, sort_vaults};
pub use vault_filter::{filter_vaults, ChainFilter, VaultFilter};
