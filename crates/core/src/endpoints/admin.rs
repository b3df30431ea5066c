//! Administrative endpoints

use sdc_domain::constants::{API_BASE, JMX_PATH};
use sdc_domain::ApiRequest;

/// Help reference IDs used by the UI
#[must_use]
pub fn help_ref() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/helpref"))
}

/// JVM metrics; served outside the versioned prefix
#[must_use]
pub fn jmx() -> ApiRequest {
    ApiRequest::get(JMX_PATH)
}

/// Stack traces of every collector thread
#[must_use]
pub fn thread_dump() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/admin/threadsDump"))
}

/// The logged-in user and their roles
#[must_use]
pub fn user_info() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/info/user"))
}

/// Collector build version and commit
#[must_use]
pub fn build_info() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/info/sdc"))
}

/// Stop the collector process
#[must_use]
pub fn shutdown_collector() -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/admin/shutdown"))
}

/// End the current authenticated session
#[must_use]
pub fn logout() -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/authentication/logout"))
}

/// Runtime, config, data and log directories
#[must_use]
pub fn sdc_directories() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/admin/sdcDirectories"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_catalog() {
        let cases = [
            (help_ref(), ApiRequest::get("/rest/v1/helpref")),
            (jmx(), ApiRequest::get("/jmx")),
            (thread_dump(), ApiRequest::get("/rest/v1/admin/threadsDump")),
            (user_info(), ApiRequest::get("/rest/v1/info/user")),
            (build_info(), ApiRequest::get("/rest/v1/info/sdc")),
            (shutdown_collector(), ApiRequest::post("/rest/v1/admin/shutdown")),
            (logout(), ApiRequest::post("/rest/v1/authentication/logout")),
            (sdc_directories(), ApiRequest::get("/rest/v1/admin/sdcDirectories")),
        ];

        for (built, expected) in cases {
            assert_eq!(built, expected);
        }
    }
}
