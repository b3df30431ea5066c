//! Configuration management

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_TIMEOUT_SECONDS};

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the Data Collector, e.g. `http://localhost:18630`
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Headers attached to every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `sdc_core=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: None,
            headers: BTreeMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "base_url": "http://sdc:18630" }"#).unwrap();

        assert_eq!(config.base_url, "http://sdc:18630");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert!(config.headers.is_empty());
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
