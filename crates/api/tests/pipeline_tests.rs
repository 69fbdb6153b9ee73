//! End-to-end tests of loading, filtering and sorting vaults.

mod helpers;

use std::collections::HashMap;

use alloy_primitives::address;
use helpers::{client_config_with_mock, mock_market_config, start_mock_server};
use curator_rs_api::{
    apply_user_positions, filter_vaults, ChainFilter, MarketApiClient, NamedChain, SortDirection,
    VaultFilter, VaultQuery, VaultSortField,
};

#[tokio::test]
async fn test_position_pinned_ahead_of_higher_apy() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let client = MarketApiClient::with_config(client_config_with_mock(&server));
    let mut listing = client.load_vaults(NamedChain::Arbitrum).await;

    // User holds the lower-TVL market only
    let positions = HashMap::from([(
        address!("1111111111111111111111111111111111111111"),
        2_500.0,
    )]);
    apply_user_positions(&mut listing.vaults, &positions);

    let displayed = VaultQuery::new()
        .sort_by(VaultSortField::Tvl)
        .direction(SortDirection::Desc)
        .apply(&listing.vaults);

    assert_eq!(displayed[0].symbol, "USDC");
    assert_eq!(displayed[1].symbol, "tmWETH");

    // Without the position, TVL decides
    apply_user_positions(&mut listing.vaults, &HashMap::new());
    let displayed = VaultQuery::new()
        .sort_by(VaultSortField::Tvl)
        .direction(SortDirection::Desc)
        .apply(&listing.vaults);
    assert_eq!(displayed[0].symbol, "tmWETH");
}

#[tokio::test]
async fn test_search_chain_and_limit() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let client = MarketApiClient::with_config(client_config_with_mock(&server));
    let listing = client
        .load_vaults_for_chains(&[NamedChain::Mainnet, NamedChain::Arbitrum])
        .await;

    let all = filter_vaults(&listing.vaults, "", ChainFilter::All);
    assert_eq!(all, listing.vaults);

    let weth_on_arbitrum = VaultQuery::new()
        .filter(
            VaultFilter::new()
                .search("weth")
                .chain(ChainFilter::Chain(NamedChain::Arbitrum)),
        )
        .apply(&listing.vaults);
    // Both market names mention WETH
    assert_eq!(weth_on_arbitrum.len(), 2);
    assert!(weth_on_arbitrum
        .iter()
        .all(|v| v.chain == NamedChain::Arbitrum));

    let limited = VaultQuery::new()
        .sort_by(VaultSortField::Maturity)
        .direction(SortDirection::Asc)
        .limit(1)
        .apply(&listing.vaults);
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].name, "USDC/WETH 30 Jun 2025");
}
