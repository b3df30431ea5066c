//! Shared test helpers for `sdc-core` integration tests.
//!
//! `FakeTransport` answers from a route table and records every request it
//! sees, so tests can assert on exactly what the facade sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sdc_core::{ApiClient, Navigator, Transport};
use sdc_domain::{ApiRequest, ApiResponse, HttpMethod, Result, SdcError};
use serde_json::Value;

#[derive(Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(HttpMethod, String), Result<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `method path` with a JSON body and status 200
    pub fn respond_json(&self, method: HttpMethod, path: &str, body: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(ApiResponse::json_body(200, &body)));
    }

    /// Answer `method path` with an HTTP failure
    pub fn fail(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.routes.lock().unwrap().insert(
            (method, path.to_string()),
            Err(SdcError::Http { status, body: body.to_string() }),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn routes_hit(&self) -> Vec<String> {
        self.requests().iter().map(ToString::to_string).collect()
    }

    /// Body of the last request sent to `method path`
    pub fn last_body(&self, method: HttpMethod, path: &str) -> Option<Value> {
        self.requests()
            .into_iter()
            .rev()
            .find(|request| request.method == method && request.path == path)
            .and_then(|request| request.body)
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let key = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);

        self.routes.lock().unwrap().get(&key).cloned().unwrap_or_else(|| {
            Err(SdcError::Http { status: 404, body: format!("no route for {} {}", key.0, key.1) })
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, path: &str) -> Result<()> {
        self.opened.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<FakeTransport>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness() -> Harness {
    let transport = FakeTransport::new();
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(transport.clone(), navigator.clone());
    Harness { client, transport, navigator }
}
