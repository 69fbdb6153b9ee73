//! Integration tests for the rebalance and metrics commands.

use predicates::prelude::*;

use super::helpers::{curator_cmd, fixture_path, scratch_copy, stdout_json};

fn vault_fixture() -> String {
    fixture_path("vault").to_str().unwrap().to_string()
}

#[test]
fn test_metrics_table_output() {
    curator_cmd()
        .args(["metrics", &vault_fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC Prime"))
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("$900.00"))
        .stdout(predicate::str::contains("7.50%"))
        .stdout(predicate::str::contains("lend-1"));
}

#[test]
fn test_metrics_after_deposit_and_withdraw() {
    let json = stdout_json(curator_cmd().args([
        "metrics",
        &vault_fixture(),
        "--deposit",
        "500",
        "--withdraw",
        "300",
        "--format",
        "json",
    ]));

    assert_eq!(json["metrics"]["totalVaultValue"], 1200.0);
    assert_eq!(json["vault"]["tvl"], 1200.0);
    assert_eq!(json["vault"]["orders"][0]["allocatedAmount"], 720.0);
}

#[test]
fn test_metrics_withdraw_exceeding_value_fails() {
    curator_cmd()
        .args(["metrics", &vault_fixture(), "--withdraw", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds vault value"));
}

#[test]
fn test_rebalance_shrinks_other_orders() {
    let json = stdout_json(curator_cmd().args([
        "rebalance",
        &vault_fixture(),
        "--order",
        "borrow-1",
        "--percentage",
        "60",
        "--format",
        "json",
    ]));

    let orders = json["vault"]["orders"].as_array().unwrap();
    let lend = orders[0]["allocationPercentage"].as_f64().unwrap();
    assert!((lend - 40.0).abs() < 1e-9);
    assert_eq!(orders[1]["allocationPercentage"], 60.0);
    let unallocated = json["metrics"]["unallocatedValue"].as_f64().unwrap();
    assert!(unallocated.abs() < 1e-9);
}

#[test]
fn test_rebalance_table_output() {
    curator_cmd()
        .args([
            "rebalance",
            &vault_fixture(),
            "--order",
            "lend-1",
            "--percentage",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00%"))
        .stdout(predicate::str::contains("$500.00"));
}

#[test]
fn test_rebalance_unknown_order_fails() {
    curator_cmd()
        .args([
            "rebalance",
            &vault_fixture(),
            "--order",
            "missing",
            "--percentage",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Order not found: missing"));
}

#[test]
fn test_rebalance_negative_percentage_fails() {
    curator_cmd()
        .args([
            "rebalance",
            &vault_fixture(),
            "--order",
            "lend-1",
            "--percentage",
            "-5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid allocation percentage"));
}

#[test]
fn test_rebalance_write_persists_vault() {
    let path = scratch_copy("vault", "rebalance_write");

    curator_cmd()
        .args([
            "rebalance",
            path.to_str().unwrap(),
            "--order",
            "lend-1",
            "--percentage",
            "25",
            "--write",
        ])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["orders"][0]["allocationPercentage"], 25.0);
    assert_eq!(saved["orders"][0]["allocatedAmount"], 250.0);
    assert_eq!(saved["orders"][1]["allocationPercentage"], 30.0);
}

#[test]
fn test_missing_vault_file() {
    curator_cmd()
        .args(["metrics", "/nonexistent/vault.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read vault file"));
}
