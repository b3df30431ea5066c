//! REST constants
//!
//! Centralized location for the path prefixes and defaults the backend
//! contract fixes.

/// REST API version segment
pub const API_VERSION: &str = "v1";

/// Versioned prefix for every REST endpoint except JMX
pub const API_BASE: &str = "/rest/v1";

/// JVM metrics endpoint; lives outside the versioned prefix
pub const JMX_PATH: &str = "/jmx";

/// Name substituted when a pipeline name is omitted
pub const DEFAULT_PIPELINE_NAME: &str = "xyz";

/// Preview batch size used when none (or zero) is given
pub const DEFAULT_PREVIEW_BATCH_SIZE: u32 = 10;

/// Log offset requesting the current tail
pub const LOG_TAIL_OFFSET: i64 = -1;

// Client defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:18630";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";
