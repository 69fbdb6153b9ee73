//! Type definitions for the market configuration API.

pub mod chain;
pub mod market;
pub mod ordering;
pub mod vault;

pub use chain::{chain_from_id, chain_id, chain_serde, parse_chain, SUPPORTED_CHAINS};
pub use market::{ApiResponse, AssetConfig, GlobalConfig, GtConfig, MarketConfig, MarketConfigList};
pub use ordering::{SortDirection, SortValue, VaultSortField};
pub use vault::{apply_user_positions, Vault, VaultListing};
