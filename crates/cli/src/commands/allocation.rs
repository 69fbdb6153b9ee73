//! Allocation planning commands operating on vault JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use curator_rs_allocation::{CuratorVault, RebalanceMetrics};
use log::{debug, info};

use crate::cli::{MetricsArgs, OutputFormat, RebalanceArgs};
use crate::output::format_vault_allocation;

fn load_vault(path: &Path) -> Result<CuratorVault> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vault file {}", path.display()))?;
    let mut vault: CuratorVault = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid vault file {}", path.display()))?;
    vault.refresh_amounts();
    debug!("Loaded vault {} with {} orders", vault.name, vault.orders.len());
    Ok(vault)
}

fn save_vault(path: &Path, vault: &CuratorVault) -> Result<()> {
    let json = serde_json::to_string_pretty(vault)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write vault file {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn print_vault(vault: &CuratorVault, metrics: &RebalanceMetrics, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", format_vault_allocation(vault, metrics));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&serde_json::json!({
                "vault": vault,
                "metrics": metrics,
            }))?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn run_rebalance(args: &RebalanceArgs, format: OutputFormat) -> Result<()> {
    let mut vault = load_vault(&args.file)?;

    let metrics = vault.set_allocation(&args.order, args.percentage)?;

    print_vault(&vault, &metrics, format)?;
    if args.write {
        save_vault(&args.file, &vault)?;
    }
    Ok(())
}

pub fn run_metrics(args: &MetricsArgs, format: OutputFormat) -> Result<()> {
    let mut vault = load_vault(&args.file)?;

    let mut metrics = vault.metrics();
    if let Some(amount) = args.deposit {
        metrics = vault.deposit(amount)?;
    }
    if let Some(amount) = args.withdraw {
        metrics = vault.withdraw(amount)?;
    }

    print_vault(&vault, &metrics, format)?;
    if args.write {
        save_vault(&args.file, &vault)?;
    }
    Ok(())
}
