//! Application context - dependency injection container

use std::sync::Arc;

use sdc_core::ApiClient;
use sdc_domain::{ClientConfig, Result};
use sdc_infra::{config, init_tracing, RestTransport, SystemNavigator};
use tracing::{info, warn};

/// Loaded configuration plus the client built from it
pub struct AppContext {
    pub config: ClientConfig,
    pub client: ApiClient,
}

impl AppContext {
    /// Load configuration, install tracing from it, then build the client.
    ///
    /// Tracing is installed before anything is logged, so the configuration
    /// source and client setup show up in the output.
    ///
    /// # Errors
    /// Returns `SdcError::Config` when no valid configuration is found, or the
    /// transport error when the configuration cannot be turned into a client.
    pub fn startup() -> Result<Self> {
        let (config, source) = config::load()?;

        let tracing_ready = init_tracing(&config.logging);
        info!(%source, "configuration loaded");
        if let Err(e) = tracing_ready {
            warn!(error = %e, "tracing was already initialised");
        }

        Self::from_config(config)
    }

    /// Build the client for an explicit configuration
    ///
    /// # Errors
    /// Returns an error if the base URL or a configured header is invalid.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = RestTransport::from_config(&config)?;
        let navigator = SystemNavigator::new(&config.base_url);
        info!(base_url = %config.base_url, timeout_seconds = config.timeout_seconds, "client ready");

        let client = ApiClient::new(Arc::new(transport), Arc::new(navigator));
        Ok(Self { config, client })
    }
}
