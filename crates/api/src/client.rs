//! HTTP client for the market configuration API.

use alloy_chains::NamedChain;
use log::{debug, warn};
use reqwest::Client;
use url::Url;

use crate::error::{ApiError, Result};
use crate::types::chain::{chain_from_id, chain_id};
use crate::types::{ApiResponse, MarketConfigList, Vault, VaultListing};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.termmax.ts.finance";

/// Path of the market configuration listing, relative to the API URL.
pub const MARKET_CONFIG_PATH: &str = "market/config/list";

/// Message surfaced when the vault list cannot be loaded.
pub const VAULT_LOAD_ERROR: &str = "Failed to load vaults";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL.
    pub api_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        #[expect(clippy::expect_used, reason = "DEFAULT_API_URL is a valid constant")]
        let api_url = Url::parse(DEFAULT_API_URL).expect("Invalid default API URL");
        Self { api_url }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom API URL.
    pub fn with_api_url(mut self, url: Url) -> Self {
        self.api_url = url;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.as_str().trim_end_matches('/'), path)
    }
}

/// Read-only client for market configuration.
///
/// Issues one request per call with no retries.
#[derive(Debug, Clone)]
pub struct MarketApiClient {
    http_client: Client,
    config: ClientConfig,
}

impl Default for MarketApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketApiClient {
    /// Create a new client with default configuration.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            config: ClientConfig::default(),
        }
    }

    /// Create a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the market configuration for a chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use curator_rs_api::{MarketApiClient, NamedChain};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), curator_rs_api::ApiError> {
    ///     let client = MarketApiClient::new();
    ///     let config = client.get_market_config(NamedChain::Arbitrum).await?;
    ///     println!("{} markets", config.markets.len());
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_market_config(&self, chain: NamedChain) -> Result<MarketConfigList> {
        let url = self.config.endpoint(MARKET_CONFIG_PATH);
        debug!("GET {} chainId={}", url, chain_id(chain));

        let response = self
            .http_client
            .get(&url)
            .query(&[("chainId", chain_id(chain))])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_body: ApiResponse<MarketConfigList> =
            serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))?;

        response_body.data.ok_or_else(|| {
            ApiError::Parse(
                response_body
                    .message
                    .unwrap_or_else(|| "No data in response".to_string()),
            )
        })
    }

    /// Fetch the market configuration for a numeric chain ID.
    pub async fn get_market_config_by_chain_id(&self, id: i64) -> Result<MarketConfigList> {
        let chain = chain_from_id(id).ok_or(ApiError::InvalidChainId(id))?;
        self.get_market_config(chain).await
    }

    /// Fetch the market configuration, logging and discarding any error.
    pub async fn try_get_market_config(&self, chain: NamedChain) -> Option<MarketConfigList> {
        match self.get_market_config(chain).await {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to fetch market config for {}: {}", chain, e);
                None
            }
        }
    }

    /// Fetch the markets of a chain as vault rows.
    pub async fn get_vaults(&self, chain: NamedChain) -> Result<Vec<Vault>> {
        let config = self.get_market_config(chain).await?;
        Ok(Vault::from_market_list(&config, chain))
    }

    /// Load the vault list for display.
    ///
    /// Never fails: on error the listing is empty and carries
    /// [`VAULT_LOAD_ERROR`].
    pub async fn load_vaults(&self, chain: NamedChain) -> VaultListing {
        match self.try_get_market_config(chain).await {
            Some(config) => VaultListing::loaded(Vault::from_market_list(&config, chain)),
            None => VaultListing::failed(VAULT_LOAD_ERROR),
        }
    }

    /// Load and merge the vault lists of several chains.
    ///
    /// Chains are fetched one after another. Any failure empties the whole
    /// listing, matching [`load_vaults`](Self::load_vaults).
    pub async fn load_vaults_for_chains(&self, chains: &[NamedChain]) -> VaultListing {
        let mut vaults = Vec::new();
        for chain in chains {
            let listing = self.load_vaults(*chain).await;
            if listing.is_error() {
                return listing;
            }
            vaults.extend(listing.vaults);
        }
        VaultListing::loaded(vaults)
    }
}
