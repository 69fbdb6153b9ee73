//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::curator_cmd;

#[test]
fn test_help_output() {
    curator_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curator"))
        .stdout(predicate::str::contains("vaults"))
        .stdout(predicate::str::contains("markets"))
        .stdout(predicate::str::contains("rebalance"))
        .stdout(predicate::str::contains("metrics"));
}

#[test]
fn test_vaults_help_output() {
    curator_cmd()
        .args(["vaults", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_invalid_command() {
    curator_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_rebalance_missing_order() {
    curator_cmd()
        .args(["rebalance", "vault.json", "--percentage", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_metrics_missing_file() {
    curator_cmd()
        .args(["metrics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_chain_value() {
    curator_cmd()
        .args(["vaults", "list", "--chain", "invalid_chain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chain"));
}

#[test]
fn test_invalid_sort_field() {
    curator_cmd()
        .args(["vaults", "list", "--sort", "popularity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_output_format() {
    curator_cmd()
        .args(["vaults", "list", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_vaults_list_help() {
    curator_cmd()
        .args(["vaults", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--chain"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--positions"))
        .stdout(predicate::str::contains("--limit"));
}
