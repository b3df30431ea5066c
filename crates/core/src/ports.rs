//! Port interfaces
//!
//! These traits define the boundary between the endpoint catalog and the
//! infrastructure that actually talks to the collector.

use async_trait::async_trait;
use sdc_domain::{ApiRequest, ApiResponse, Result};

/// Executes a request against the collector.
///
/// Implementations return `Ok` only for success statuses. Anything else is
/// reported as an error without reinterpretation: `SdcError::Http` when the
/// backend answered, `SdcError::Network` when it did not.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Opens a collector URL for the user (used for downloads such as export).
pub trait Navigator: Send + Sync {
    /// Open `path`, a collector-relative path including its query string.
    ///
    /// Returns once the open has been handed off; it does not wait for the
    /// browser.
    fn open(&self, path: &str) -> Result<()>;
}
