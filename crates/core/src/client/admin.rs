use sdc_domain::{ApiResponse, Result};
use tracing::{info, instrument};

use super::ApiClient;
use crate::endpoints::admin as endpoints;

/// Administrative operations
#[derive(Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Help reference IDs
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn help_ref(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::help_ref()).await
    }

    /// JVM metrics
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn jmx(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::jmx()).await
    }

    /// Stack traces of every collector thread
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn thread_dump(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::thread_dump()).await
    }

    /// Information about the logged-in user
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn user_info(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::user_info()).await
    }

    /// Collector build version and commit
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn build_info(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::build_info()).await
    }

    /// Ask the collector to shut down
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn shutdown_collector(&self) -> Result<ApiResponse> {
        info!("requesting collector shutdown");
        self.client.send(endpoints::shutdown_collector()).await
    }

    /// End the current authenticated session
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::logout()).await
    }

    /// Runtime, config, data and log directories of the collector
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn sdc_directories(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::sdc_directories()).await
    }
}
