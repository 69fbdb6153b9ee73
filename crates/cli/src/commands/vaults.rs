//! Vault list command implementation.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use anyhow::{Context, Result};
use curator_rs_api::{
    apply_user_positions, ChainFilter, MarketApiClient, VaultFilter, VaultQuery, SUPPORTED_CHAINS,
};
use log::debug;

use super::client_config;
use crate::cli::{ListArgs, OutputFormat};
use crate::output::format_vaults_table;

/// Read a `{ "<address>": <position> }` JSON file.
fn load_positions(path: &Path) -> Result<HashMap<Address, f64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read positions file {}", path.display()))?;
    let raw: HashMap<String, f64> = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid positions file {}", path.display()))?;

    raw.into_iter()
        .map(|(address, position)| {
            let address = Address::from_str(&address)
                .with_context(|| format!("Invalid vault address in positions file: {}", address))?;
            Ok((address, position))
        })
        .collect()
}

pub async fn run_vaults_list(
    args: &ListArgs,
    format: OutputFormat,
    api_url: Option<&str>,
) -> Result<()> {
    let positions = args.positions.as_deref().map(load_positions).transpose()?;

    let client = MarketApiClient::with_config(client_config(api_url)?);
    let listing = match args.chain {
        ChainFilter::All => client.load_vaults_for_chains(SUPPORTED_CHAINS).await,
        ChainFilter::Chain(chain) => client.load_vaults(chain).await,
    };
    if let Some(error) = &listing.error {
        eprintln!("Error: {}", error);
    }

    let mut vaults = listing.vaults;
    if let Some(positions) = &positions {
        apply_user_positions(&mut vaults, positions);
    }

    let mut filter = VaultFilter::new().chain(args.chain);
    if let Some(search) = &args.search {
        filter = filter.search(search.as_str());
    }
    let displayed = VaultQuery::new()
        .filter(filter)
        .sort_by(args.sort)
        .direction(args.direction)
        .limit(args.limit)
        .apply(&vaults);
    debug!("Showing {} of {} vaults", displayed.len(), vaults.len());

    match format {
        OutputFormat::Table => {
            println!("{}", format_vaults_table(&displayed));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&displayed)?;
            println!("{}", json);
        }
    }

    Ok(())
}
