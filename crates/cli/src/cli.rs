//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use curator_rs_api::{parse_chain, ChainFilter, NamedChain, SortDirection, VaultSortField};

/// Curator CLI - Browse vaults and plan allocations
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(about = "CLI tool for browsing curator vaults and planning allocations", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Market configuration API URL
    #[arg(long, global = true, env = "CURATOR_API_URL")]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query vaults
    #[command(name = "vaults")]
    Vaults {
        #[command(subcommand)]
        subcommand: VaultsSubcommand,
    },
    /// Show the market configuration of a chain
    #[command(name = "markets")]
    Markets(MarketsArgs),
    /// Change one order's allocation in a vault file
    #[command(name = "rebalance")]
    Rebalance(RebalanceArgs),
    /// Show allocation metrics for a vault file, optionally after a flow
    #[command(name = "metrics")]
    Metrics(MetricsArgs),
}

#[derive(Subcommand, Debug)]
pub enum VaultsSubcommand {
    /// List vaults, filtered and sorted
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Filter by chain (e.g., all, ethereum, arbitrum, bnb)
    #[arg(long, default_value = "all")]
    pub chain: ChainFilter,

    /// Case-insensitive search over name and symbol
    #[arg(long)]
    pub search: Option<String>,

    /// Sort field (name, symbol, address, chain, tvl, apy, ltv, position, maturity)
    #[arg(long, default_value = "tvl")]
    pub sort: VaultSortField,

    /// Sort direction
    #[arg(long, default_value = "desc")]
    pub direction: SortDirection,

    /// Limit the number of results
    #[arg(short = 'n', long, default_value = "25")]
    pub limit: usize,

    /// JSON file mapping vault addresses to the user's position
    #[arg(long)]
    pub positions: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct MarketsArgs {
    /// Chain to query (default: arbitrum)
    #[arg(long, default_value = "arbitrum")]
    pub chain: ChainArg,
}

#[derive(Parser, Debug)]
pub struct RebalanceArgs {
    /// Vault JSON file
    pub file: PathBuf,

    /// Identifier of the order to change
    #[arg(long)]
    pub order: String,

    /// New allocation percentage (0-100)
    #[arg(long, allow_negative_numbers = true)]
    pub percentage: f64,

    /// Write the rebalanced vault back to the file
    #[arg(long)]
    pub write: bool,
}

#[derive(Parser, Debug)]
pub struct MetricsArgs {
    /// Vault JSON file
    pub file: PathBuf,

    /// Amount deposited into the vault
    #[arg(long)]
    pub deposit: Option<f64>,

    /// Amount withdrawn from the vault
    #[arg(long)]
    pub withdraw: Option<f64>,

    /// Write the updated vault back to the file
    #[arg(long)]
    pub write: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper for NamedChain that implements FromStr with aliases
#[derive(Clone, Copy, Debug)]
pub struct ChainArg(pub NamedChain);

impl FromStr for ChainArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chain(s)
            .map(ChainArg)
            .ok_or_else(|| format!("Unknown chain: {}", s))
    }
}

impl std::fmt::Display for ChainArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
