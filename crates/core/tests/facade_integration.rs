//! Integration tests for the `ApiClient` facade
//!
//! Verifies that namespace methods hand the transport exactly one request
//! each and forward whatever comes back.

mod support;

use sdc_domain::{ApiRequest, ConfigOverride, HttpMethod, PreviewOptions, SdcError};
use serde_json::json;
use support::harness;

#[tokio::test]
async fn repeated_reads_issue_identical_requests() {
    let h = harness();
    h.transport.respond_json(
        HttpMethod::Get,
        "/rest/v1/pipeline/p1/status?rev=0",
        json!({ "status": "RUNNING" }),
    );

    let agent = h.client.pipeline_agent();
    let first = agent.pipeline_status("p1", "0").await.unwrap();
    let second = agent.pipeline_status("p1", "0").await.unwrap();

    assert_eq!(first, second);
    let requests = h.transport.requests();
    assert_eq!(requests.len(), 2, "no client-side caching");
    assert_eq!(requests[0], requests[1]);
}

#[tokio::test]
async fn failures_are_forwarded_verbatim() {
    let h = harness();
    h.transport.fail(HttpMethod::Post, "/rest/v1/pipeline/p1/start?rev=0", 403, "forbidden");

    let err = h.client.pipeline_agent().start_pipeline("p1", "0").await.unwrap_err();
    assert_eq!(err, SdcError::Http { status: 403, body: "forbidden".into() });
}

#[tokio::test]
async fn responses_are_forwarded_verbatim() {
    let h = harness();
    h.transport.respond_json(HttpMethod::Get, "/jmx", json!({ "beans": [] }));

    let response = h.client.admin().jmx().await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.json::<serde_json::Value>().unwrap(), json!({ "beans": [] }));
}

#[tokio::test]
async fn every_namespace_reaches_its_endpoint() {
    let h = harness();

    // Unrouted requests fail with 404, but are still recorded
    let _ = h.client.log().current_log(None).await;
    let _ = h.client.log().files().await;
    let _ = h.client.admin().build_info().await;
    let _ = h.client.admin().logout().await;
    let _ = h.client.time_series().time_series_data("q1").await;
    let _ = h.client.pipeline_agent().history("p1").await;
    let _ = h.client.pipeline_agent().reset_offset("p1").await;

    assert_eq!(
        h.transport.routes_hit(),
        vec![
            "GET /rest/v1/log?endingOffset=-1",
            "GET /rest/v1/log/files",
            "GET /rest/v1/info/sdc",
            "POST /rest/v1/authentication/logout",
            "GET /rest/v1/pipeline/metrics/timeSeries?q=q1",
            "GET /rest/v1/pipeline/p1/history",
            "POST /rest/v1/pipeline/p1/resetOffset",
        ]
    );
}

#[tokio::test]
async fn save_sends_payload_as_body() {
    let h = harness();
    let payload = json!({ "name": "p1", "stages": [{ "instanceName": "s1" }] });
    h.transport.respond_json(HttpMethod::Post, "/rest/v1/pipeline-library/p1", payload.clone());

    h.client.pipeline_agent().save_pipeline_config(Some("p1"), &payload).await.unwrap();

    assert_eq!(
        h.transport.requests(),
        vec![ApiRequest::post("/rest/v1/pipeline-library/p1").with_body(payload)]
    );
}

#[tokio::test]
async fn preview_and_raw_source_requests() {
    let h = harness();
    let agent = h.client.pipeline_agent();

    let _ = agent.create_preview("p1", &PreviewOptions::new("0").skip_targets(true)).await;
    let _ = agent
        .raw_source_preview("p1", "0", &[ConfigOverride::new("dataFormat", "JSON")])
        .await;

    let requests = h.transport.requests();
    assert_eq!(
        requests[0].path,
        "/rest/v1/preview/p1/create?batchSize=10&rev=0&skipTargets=true"
    );
    assert_eq!(requests[0].body, Some(json!([])));
    assert_eq!(requests[1].path, "/rest/v1/preview/p1/rawSourcePreview?rev=0&dataFormat=JSON");
}

#[tokio::test]
async fn export_navigates_instead_of_requesting() {
    let h = harness();

    h.client.pipeline_agent().export_pipeline_config(None).unwrap();
    h.client.pipeline_agent().export_pipeline_config(Some("p1")).unwrap();

    assert!(h.transport.requests().is_empty());
    assert_eq!(
        h.navigator.opened(),
        vec![
            "/rest/v1/pipeline-library/xyz?attachment=true",
            "/rest/v1/pipeline-library/p1?attachment=true",
        ]
    );
}

#[test]
fn reports_api_version() {
    assert_eq!(harness().client.api_version(), "v1");
}
