//! Search and chain filters for vault lists.

use std::str::FromStr;

use alloy_chains::NamedChain;

use crate::types::chain::parse_chain;
use crate::types::Vault;

/// Chain restriction for a vault list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainFilter {
    /// Every chain.
    #[default]
    All,
    /// A single chain.
    Chain(NamedChain),
}

impl ChainFilter {
    /// Whether a vault on `chain` passes this filter.
    pub fn matches(&self, chain: NamedChain) -> bool {
        match self {
            ChainFilter::All => true,
            ChainFilter::Chain(wanted) => *wanted == chain,
        }
    }
}

impl FromStr for ChainFilter {
    type Err = String;

    /// Parses `"all"` or any chain name, alias or ID, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ChainFilter::All);
        }
        parse_chain(s)
            .map(ChainFilter::Chain)
            .ok_or_else(|| format!("Unknown chain: {}", s))
    }
}

impl std::fmt::Display for ChainFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainFilter::All => write!(f, "all"),
            ChainFilter::Chain(chain) => write!(f, "{}", chain.as_str()),
        }
    }
}

/// Builder for client-side vault filters.
#[derive(Debug, Clone, Default)]
pub struct VaultFilter {
    /// Case-insensitive substring matched against name and symbol.
    pub search_term: String,
    /// Chain restriction.
    pub chain: ChainFilter,
}

impl VaultFilter {
    /// Create a filter that matches every vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the chain restriction.
    pub fn chain(mut self, chain: ChainFilter) -> Self {
        self.chain = chain;
        self
    }

    /// Whether a vault passes both the search and chain filters.
    pub fn matches(&self, vault: &Vault) -> bool {
        matches_search(vault, &self.search_term) && self.chain.matches(vault.chain)
    }

    /// Apply the filter, preserving the input order.
    pub fn apply(&self, vaults: &[Vault]) -> Vec<Vault> {
        vaults.iter().filter(|v| self.matches(v)).cloned().collect()
    }
}

fn matches_search(vault: &Vault, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    vault.name.to_lowercase().contains(&term) || vault.symbol.to_lowercase().contains(&term)
}

/// Keep vaults matching `search_term` and `chain`, in input order.
pub fn filter_vaults(vaults: &[Vault], search_term: &str, chain: ChainFilter) -> Vec<Vault> {
    VaultFilter::new().search(search_term).chain(chain).apply(vaults)
}
