//! Endpoint catalog
//!
//! Pure request builders, one per backend operation. Each returns the exact
//! verb, path and body the collector expects; nothing here performs I/O.
//! Values are interpolated into paths and query strings unescaped.

pub mod admin;
pub mod log;
pub mod pipeline;
pub mod time_series;

use sdc_domain::constants::DEFAULT_PIPELINE_NAME;

/// Substitute the placeholder name when `name` is missing or empty
pub(crate) fn name_or_default(name: Option<&str>) -> &str {
    name.filter(|name| !name.is_empty()).unwrap_or(DEFAULT_PIPELINE_NAME)
}
