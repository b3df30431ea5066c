//! Time-series metric endpoints

use sdc_domain::constants::API_BASE;
use sdc_domain::ApiRequest;

/// Time-series data for a metrics query, passed through as-is
#[must_use]
pub fn time_series_data(query: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/metrics/timeSeries?q={query}"))
}
