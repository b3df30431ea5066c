//! API client facade
//!
//! `ApiClient` owns the injected ports and hands out borrowed namespace views
//! (`log`, `admin`, `pipeline_agent`, `time_series`). Every namespace method
//! performs exactly one request and returns the transport's answer verbatim.

mod admin;
mod log;
mod pipeline_agent;
mod time_series;

use std::sync::Arc;

pub use admin::AdminApi;
pub use log::LogApi;
pub use pipeline_agent::PipelineAgentApi;
use sdc_domain::constants::API_VERSION;
use sdc_domain::{ApiRequest, ApiResponse, Result};
pub use time_series::TimeSeriesApi;
use tracing::{debug, warn};

use crate::ports::{Navigator, Transport};

/// Client for the Data Collector REST API
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Create a client over the given transport and navigator
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, navigator: Arc<dyn Navigator>) -> Self {
        Self { transport, navigator }
    }

    /// REST API version this client speaks
    #[must_use]
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Collector log operations
    #[must_use]
    pub fn log(&self) -> LogApi<'_> {
        LogApi::new(self)
    }

    #[must_use]
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// Pipeline library, preview, lifecycle and snapshot operations
    #[must_use]
    pub fn pipeline_agent(&self) -> PipelineAgentApi<'_> {
        PipelineAgentApi::new(self)
    }

    #[must_use]
    pub fn time_series(&self) -> TimeSeriesApi<'_> {
        TimeSeriesApi::new(self)
    }

    pub(crate) async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        debug!(method = %request.method, path = %request.path, "dispatching request");

        match self.transport.execute(request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                warn!(error = %err, "request failed");
                Err(err)
            }
        }
    }

    pub(crate) fn navigate(&self, path: &str) -> Result<()> {
        debug!(path, "opening collector url");
        self.navigator.open(path)
    }
}
