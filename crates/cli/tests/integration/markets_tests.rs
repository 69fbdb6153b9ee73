//! Integration tests for the markets command.

use predicates::prelude::*;

use super::helpers::{
    curator_cmd_with_mock, mock_http_error, mock_market_config, start_mock_server, stdout_json,
};

#[tokio::test]
async fn test_markets_table_output() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    curator_cmd_with_mock(&server)
        .args(["markets", "--chain", "arbitrum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC/WETH 30 Jun 2025"))
        .stdout(predicate::str::contains("Jun 30, 2025"))
        .stdout(predicate::str::contains("7.25%"))
        .stdout(predicate::str::contains("2 markets, 2 assets, 1 gearing tokens"));
}

#[tokio::test]
async fn test_markets_json_output() {
    let server = start_mock_server().await;
    mock_market_config(&server, "market_config_list").await;

    let json = stdout_json(
        curator_cmd_with_mock(&server).args(["markets", "--chain", "42161", "--format", "json"]),
    );

    assert_eq!(json["markets"].as_array().unwrap().len(), 2);
    assert_eq!(json["assetConfigs"][0]["symbol"], "USDC");
}

#[tokio::test]
async fn test_markets_http_error_fails() {
    let server = start_mock_server().await;
    mock_http_error(&server, 500).await;

    curator_cmd_with_mock(&server)
        .args(["markets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("500"));
}
