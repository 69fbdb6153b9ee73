//! Curator CLI - Browse vaults and plan allocations.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands, VaultsSubcommand};
use commands::{run_markets, run_metrics, run_rebalance, run_vaults_list};

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api_url = cli.api_url.as_deref();

    match cli.command {
        Commands::Vaults { subcommand } => match subcommand {
            VaultsSubcommand::List(args) => {
                run_vaults_list(&args, cli.format, api_url).await?;
            }
        },
        Commands::Markets(args) => {
            run_markets(&args, cli.format, api_url).await?;
        }
        Commands::Rebalance(args) => {
            run_rebalance(&args, cli.format)?;
        }
        Commands::Metrics(args) => {
            run_metrics(&args, cli.format)?;
        }
    }

    Ok(())
}
