use sdc_domain::{ApiResponse, Result};
use tracing::instrument;

use super::ApiClient;
use crate::endpoints::time_series as endpoints;

/// Time-series metrics
#[derive(Clone, Copy)]
pub struct TimeSeriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TimeSeriesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Run a time-series query against the collector metrics store
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn time_series_data(&self, query: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::time_series_data(query)).await
    }
}
