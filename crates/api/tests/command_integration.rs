//! Integration tests for `sdc` commands against a mocked collector

use sdc_domain::{ClientConfig, SdcError};
use clap::Parser;
use sdc_lib::{AppContext, Cli, Command};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn command(args: &[&str]) -> Command {
    Cli::try_parse_from(std::iter::once("sdc").chain(args.iter().copied()))
        .expect("valid command line")
        .command
        .expect("subcommand")
}

fn context_for(server: &MockServer) -> AppContext {
    let config = ClientConfig { base_url: server.uri(), ..Default::default() };
    AppContext::from_config(config).expect("context")
}

#[tokio::test]
async fn status_prints_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/pipeline/p1/status"))
        .and(query_param("rev", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"STOPPED"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context_for(&server);
    let output = command(&["status", "p1"]).execute(&ctx.client).await.unwrap();

    assert_eq!(output, r#"{"status":"STOPPED"}"#);
}

#[tokio::test]
async fn start_failure_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/pipeline/p1/start"))
        .and(query_param("rev", "2"))
        .respond_with(ResponseTemplate::new(404).set_body_string("pipeline not found"))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context_for(&server);
    let err = command(&["start", "p1", "2"]).execute(&ctx.client).await.unwrap_err();

    assert_eq!(err, SdcError::Http { status: 404, body: "pipeline not found".into() });
}

#[tokio::test]
async fn duplicate_prints_saved_configuration() {
    let server = MockServer::start().await;
    let library = |name: &str| format!("/rest/v1/pipeline-library/{name}");

    Mock::given(method("GET"))
        .and(path(library("P1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "P1", "configuration": [], "uiInfo": {}, "errorStage": null, "stages": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/rules", library("P1"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "emailIds": ["a@b.c"] })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(library("P2")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "name": "P2" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(library("P2")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "P2", "uuid": "saved" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/rules", library("P2"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uuid": "r2" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{}/rules", library("P2"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uuid": "r2" })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = context_for(&server);
    let output =
        command(&["duplicate", "P1", "P2", "nightly copy"]).execute(&ctx.client).await.unwrap();

    let printed: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed["name"], json!("P2"));
    assert_eq!(printed["uuid"], json!("saved"));
}

#[test]
fn invalid_base_url_fails_context_creation() {
    let config = ClientConfig { base_url: "not a url".into(), ..Default::default() };
    assert!(matches!(AppContext::from_config(config), Err(SdcError::InvalidRequest(_))));
}
