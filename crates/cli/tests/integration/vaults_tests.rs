//! Integration tests for the vault list command.

use predicates::prelude::*;

use super::helpers::{
    curator_cmd_with_mock, fixture_path, mock_http_error, mock_market_config, start_mock_server,
    stdout_json,
};

#[tokio::test]
async fn test_list_table_output() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    curator_cmd_with_mock(&server)
        .args(["vaults", "list", "--chain", "arbitrum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC/WETH 30 Jun 2025"))
        .stdout(predicate::str::contains("WETH/wstETH 26 Dec 2025"))
        .stdout(predicate::str::contains("tmWETH"))
        .stdout(predicate::str::contains("$4.80M"))
        .stdout(predicate::str::contains("86.0%"));
}

#[tokio::test]
async fn test_list_json_sorted_by_tvl_desc() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let json = stdout_json(
        curator_cmd_with_mock(&server).args(["vaults", "list", "--chain", "arb", "--format", "json"]),
    );
    let vaults = json.as_array().unwrap();

    assert_eq!(vaults.len(), 2);
    assert_eq!(vaults[0]["name"], "WETH/wstETH 26 Dec 2025");
    assert_eq!(vaults[1]["name"], "USDC/WETH 30 Jun 2025");
    assert_eq!(vaults[1]["chain"], 42161);
}

#[tokio::test]
async fn test_list_all_chains_merges_results() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let json = stdout_json(
        curator_cmd_with_mock(&server).args(["vaults", "list", "--format", "json"]),
    );

    // The mock answers every supported chain with the same two markets
    assert_eq!(json.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_list_search_and_limit() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let json = stdout_json(curator_cmd_with_mock(&server).args([
        "vaults",
        "list",
        "--chain",
        "arbitrum",
        "--search",
        "WETH",
        "--sort",
        "apy",
        "--direction",
        "asc",
        "--limit",
        "1",
        "--format",
        "json",
    ]));
    let vaults = json.as_array().unwrap();

    assert_eq!(vaults.len(), 1);
    assert_eq!(vaults[0]["symbol"], "tmWETH");
}

#[tokio::test]
async fn test_list_search_without_match() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    curator_cmd_with_mock(&server)
        .args(["vaults", "list", "--chain", "arbitrum", "--search", "dai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vaults found."));
}

#[tokio::test]
async fn test_list_positions_are_pinned_first() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let positions = fixture_path("positions");
    let json = stdout_json(curator_cmd_with_mock(&server).args([
        "vaults",
        "list",
        "--chain",
        "arbitrum",
        "--sort",
        "tvl",
        "--positions",
        positions.to_str().unwrap(),
        "--format",
        "json",
    ]));
    let vaults = json.as_array().unwrap();

    // Lower TVL, but the user holds a position in it
    assert_eq!(vaults[0]["name"], "USDC/WETH 30 Jun 2025");
    assert_eq!(vaults[0]["userPosition"], 2500.0);
    assert_eq!(vaults[1]["userPosition"], 0.0);
}

#[tokio::test]
async fn test_list_missing_positions_file() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    curator_cmd_with_mock(&server)
        .args(["vaults", "list", "--positions", "/nonexistent/positions.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read positions file"));
}

#[tokio::test]
async fn test_list_fetch_failure_shows_generic_error() {
    let server = start_mock_server().await;
    mock_http_error(&server, 500).await;

    curator_cmd_with_mock(&server)
        .args(["vaults", "list", "--chain", "arbitrum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vaults found."))
        .stderr(predicate::str::contains("Failed to load vaults"));
}
