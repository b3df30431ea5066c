//! Log endpoints

use sdc_domain::constants::{API_BASE, LOG_TAIL_OFFSET};
use sdc_domain::ApiRequest;

/// Current log contents ending at `ending_offset` (`-1` when absent or zero)
#[must_use]
pub fn current_log(ending_offset: Option<i64>) -> ApiRequest {
    let offset = ending_offset.filter(|offset| *offset != 0).unwrap_or(LOG_TAIL_OFFSET);
    ApiRequest::get(format!("{API_BASE}/log?endingOffset={offset}"))
}

/// Log files available for download
#[must_use]
pub fn files() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/log/files"))
}
