use sdc_domain::{ApiResponse, Result};
use tracing::instrument;

use super::ApiClient;
use crate::endpoints::log as endpoints;

/// Collector log access
#[derive(Clone, Copy)]
pub struct LogApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LogApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the log ending at `ending_offset`, or the current tail
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn current_log(&self, ending_offset: Option<i64>) -> Result<ApiResponse> {
        self.client.send(endpoints::current_log(ending_offset)).await
    }

    /// List log file names
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn files(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::files()).await
    }
}
