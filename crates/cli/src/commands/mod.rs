//! Command implementations.

pub mod allocation;
pub mod markets;
pub mod vaults;

pub use allocation::{run_metrics, run_rebalance};
pub use markets::run_markets;
pub use vaults::run_vaults_list;

use anyhow::Result;
use curator_rs_api::ClientConfig;

/// Create a default ClientConfig with optional API URL.
fn client_config(api_url: Option<&str>) -> Result<ClientConfig> {
    let config = ClientConfig::new();
    if let Some(url) = api_url {
        Ok(config.with_api_url(url.parse()?))
    } else {
        Ok(config)
    }
}
