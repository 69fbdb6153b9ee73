//! Market configuration command implementation.

use anyhow::Result;
use curator_rs_api::MarketApiClient;

use super::client_config;
use crate::cli::{MarketsArgs, OutputFormat};
use crate::output::format_markets_table;

pub async fn run_markets(
    args: &MarketsArgs,
    format: OutputFormat,
    api_url: Option<&str>,
) -> Result<()> {
    let client = MarketApiClient::with_config(client_config(api_url)?);
    let config = client.get_market_config(args.chain.0).await?;

    match format {
        OutputFormat::Table => {
            println!("{}", format_markets_table(&config));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
    }

    Ok(())
}
