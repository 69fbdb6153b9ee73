//! Curator Vaults Rust API Library
//!
//! This crate provides a read-only client for the market configuration API,
//! the vault read model built from it, and the client-side pipeline that turns
//! a raw vault list into the displayed one.
//!
//! # Example
//!
//! ```no_run
//! use curator_rs_api::{
//!     ChainFilter, MarketApiClient, NamedChain, SortDirection, VaultFilter, VaultQuery,
//!     VaultSortField,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = MarketApiClient::new();
//!     let listing = client.load_vaults(NamedChain::Arbitrum).await;
//!     if let Some(error) = &listing.error {
//!         eprintln!("{error}");
//!     }
//!
//!     let displayed = VaultQuery::new()
//!         .filter(VaultFilter::new().search("usdc").chain(ChainFilter::All))
//!         .sort_by(VaultSortField::Apy)
//!         .direction(SortDirection::Desc)
//!         .apply(&listing.vaults);
//!     println!("{} vaults", displayed.len());
//! }
//! ```
//!
//! # Error Handling
//!
//! Fallible calls return [`ApiError`]. The `try_*` and `load_*` methods
//! recover every error, log it, and return `None` or an empty
//! [`VaultListing`] instead.

pub mod client;
pub mod error;
pub mod filters;
pub mod format;
pub mod types;

// Re-export main types at crate root
pub use alloy_chains::NamedChain;
pub use client::{ClientConfig, MarketApiClient, DEFAULT_API_URL, VAULT_LOAD_ERROR};
pub use error::{ApiError, Result};
pub use filters::{compare_vaults, filter_vaults, sort_vaults, ChainFilter, VaultFilter, VaultQuery};
pub use types::{
    apply_user_positions, chain_from_id, chain_id, chain_serde, parse_chain, AssetConfig,
    GlobalConfig, GtConfig, MarketConfig, MarketConfigList, SortDirection, SortValue, Vault,
    VaultListing, VaultSortField, SUPPORTED_CHAINS,
};
