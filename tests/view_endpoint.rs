//! End-to-end tests for `ixb view` against a mock collections endpoint

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTIONS_PATH: &str = "/api/chroma-collections";

fn ixb(server: &MockServer) -> Command {
    let endpoint = format!("{}{}", server.uri(), COLLECTIONS_PATH);
    let mut cmd = Command::cargo_bin("ixb").unwrap();
    cmd.env_remove("IXB_OUTPUT_FORMAT")
        .env_remove("IXB_TIMEOUT")
        .env("NO_COLOR", "1")
        .args(["--endpoint", endpoint.as_str()]);
    cmd
}

async fn serve(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_lists_collapsed_sections() {
    let server = serve(json!({
        "collections": [
            { "collection_name": "jira_issues", "records": [{ "id": "PROJ-1", "document": "body" }] },
            { "name": "confluence_pages" },
            { "bogus": true }
        ]
    }))
    .await;

    ixb(&server)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("View Index Data: Collections"))
        .stdout(predicate::str::contains("jira_issues (1 records)"))
        .stdout(predicate::str::contains("confluence_pages (0 records)"))
        .stdout(predicate::str::contains("PROJ-1").not())
        .stdout(predicate::str::contains("Total: 2 collections"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_expanded_shows_records() {
    let server = serve(json!({
        "collections": [{
            "collection_name": "Y",
            "records": [{ "id": "1", "document": "d", "metadata": { "a": 1, "k": { "b": 2 } } }]
        }]
    }))
    .await;

    ixb(&server)
        .args(["view", "--expand-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Y (1 records)"))
        .stdout(predicate::str::contains("[a: 1]"))
        .stdout(predicate::str::contains(r#"[k: {"b":2}]"#));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_empty_collections() {
    let server = serve(json!({ "collections": [] })).await;

    ixb(&server)
        .arg("view")
        .assert()
        .success()
        .stdout(predicate::str::contains("No collections found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_json_output() {
    let server = serve(json!({ "collections": [{ "name": "X" }] })).await;

    let output = ixb(&server)
        .args(["--format", "json", "view"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, json!({ "collections": [{ "name": "X", "records": [] }] }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_server_error_shows_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    ixb(&server)
        .arg("view")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to fetch collections (HTTP 500)"))
        .stdout(predicate::str::contains("No collections found.").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_view_unreachable_endpoint() {
    let mut cmd = Command::cargo_bin("ixb").unwrap();
    cmd.env("NO_COLOR", "1")
        .args(["--endpoint", "http://127.0.0.1:9/api/chroma-collections", "--timeout", "2", "view"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to reach"));
}
