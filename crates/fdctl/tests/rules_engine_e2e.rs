//! End-to-end tests driving the binary against a mock management endpoint
//!
//! Credentials are injected through the environment, exercising the same path
//! a token-exporting shell session would use.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION: &str =
    "/subscriptions/sub-1/resourceGroups/prod-rg/providers/Microsoft.Network/frontDoors/contoso-fd/rulesEngines";

fn fdctl(api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("fdctl").unwrap();
    cmd.env_remove("FDCTL_PROFILE")
        .env_remove("FDCTL_CONFIG_FILE")
        .env("AZURE_SUBSCRIPTION_ID", "sub-1")
        .env("AZURE_MGMT_ACCESS_TOKEN", "test-token")
        .env("AZURE_MGMT_URL", api_url);
    cmd
}

fn engine_json(name: &str) -> serde_json::Value {
    json!({
        "id": format!("{COLLECTION}/{name}"),
        "name": name,
        "type": "Microsoft.Network/frontDoors/rulesEngines",
        "properties": {"resourceState": "Enabled", "rules": []}
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn get_by_name_prints_engine() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/edge-rules")))
        .respond_with(ResponseTemplate::new(200).set_body_json(engine_json("edge-rules")))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        fdctl(&uri)
            .args([
                "rules-engine",
                "get",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-n",
                "edge-rules",
                "-o",
                "json",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("edge-rules"))
            .stdout(predicate::str::contains("Enabled"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_engine_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/ghost")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        fdctl(&uri)
            .args([
                "rules-engine",
                "get",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-n",
                "ghost",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Rules engine 'ghost' not found in resource group 'prod-rg'",
            ));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn get_surfaces_unexpected_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/edge-rules")))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        fdctl(&uri)
            .args([
                "rules-engine",
                "get",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-n",
                "edge-rules",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("HTTP 500"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn list_spans_page_boundaries_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [engine_json("alpha"), engine_json("beta")],
            "nextLink": format!("{}/page-two?api-version=2020-05-01", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page-two"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [engine_json("gamma")]
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let assert = fdctl(&uri)
            .args([
                "rules-engine",
                "get",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-o",
                "json",
            ])
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
        let alpha = stdout.find("alpha").expect("alpha missing");
        let beta = stdout.find("beta").expect("beta missing");
        let gamma = stdout.find("gamma").expect("gamma missing");
        assert!(alpha < beta && beta < gamma, "server order not preserved");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn set_round_trips_rules() {
    let server = MockServer::start().await;

    let rules_arg = json!([{
        "name": "redirect-http",
        "priority": 1,
        "action": {},
        "matchConditions": [{
            "rulesEngineMatchVariable": "RequestScheme",
            "rulesEngineOperator": "Equal",
            "rulesEngineMatchValue": ["HTTP"]
        }]
    }]);

    // The exact body the CLI must send for that input.
    let expected_body = json!({
        "properties": {
            "rules": [{
                "name": "redirect-http",
                "priority": 1,
                "action": {},
                "matchConditions": [{
                    "rulesEngineMatchVariable": "RequestScheme",
                    "rulesEngineOperator": "Equal",
                    "negateCondition": false,
                    "rulesEngineMatchValue": ["HTTP"]
                }]
            }]
        }
    });

    Mock::given(method("PUT"))
        .and(path(format!("{COLLECTION}/edge-rules")))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": format!("{COLLECTION}/edge-rules"),
            "name": "edge-rules",
            "type": "Microsoft.Network/frontDoors/rulesEngines",
            "properties": {
                "resourceState": "Enabled",
                "rules": expected_body["properties"]["rules"]
            }
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        let rules_json = rules_arg.to_string();
        fdctl(&uri)
            .args([
                "rules-engine",
                "set",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-n",
                "edge-rules",
                "--rules",
                rules_json.as_str(),
                "-o",
                "json",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("edge-rules"))
            .stdout(predicate::str::contains("redirect-http"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn set_server_error_prints_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{COLLECTION}/edge-rules")))
        .respond_with(ResponseTemplate::new(400).set_body_string("rules quota exceeded"))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        fdctl(&uri)
            .args([
                "rules-engine",
                "set",
                "-g",
                "prod-rg",
                "-f",
                "contoso-fd",
                "-n",
                "edge-rules",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Error response from server: rules quota exceeded",
            ));
    })
    .await
    .unwrap();
}
