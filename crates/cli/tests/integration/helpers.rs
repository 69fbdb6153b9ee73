//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use std::path::PathBuf;

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock API server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a CLI command pointing to a mock server.
pub fn curator_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("curator").unwrap();
    cmd.env("CURATOR_API_URL", mock.uri());
    cmd
}

/// Create a CLI command without mock server (for validation and file tests).
pub fn curator_cmd() -> Command {
    let mut cmd = Command::cargo_bin("curator").unwrap();
    cmd.env_remove("CURATOR_API_URL");
    cmd
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    ))
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", path.display()))
}

/// Copy a fixture into the test scratch directory so it can be modified.
pub fn scratch_copy(name: &str, copy_name: &str) -> PathBuf {
    let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(format!("{}.json", copy_name));
    std::fs::write(&path, load_fixture(name)).unwrap();
    path
}

/// Mock the market config endpoint with a fixture response.
pub async fn mock_market_config(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("GET"))
        .and(path("/market/config/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock an HTTP error response.
pub async fn mock_http_error(server: &MockServer, status_code: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string("Internal Server Error"))
        .mount(server)
        .await;
}

/// Parse stdout of a successful command as JSON.
pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
