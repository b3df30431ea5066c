//! Tracing subscriber setup
//!
//! Log records go to stderr so command output on stdout stays parseable.

use sdc_domain::{LoggingConfig, Result, SdcError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber described by `config`
///
/// `RUST_LOG` takes precedence over `config.level` when set.
///
/// # Errors
/// Returns `SdcError::Config` if the filter directive is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).json();
        #[cfg(debug_assertions)]
        let layer = layer.with_file(true).with_line_number(true);
        registry.with(layer).try_init()
    } else {
        let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
        registry.with(layer).try_init()
    };

    installed.map_err(|e| SdcError::Config(format!("Failed to install tracing subscriber: {e}")))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| SdcError::Config(format!("Invalid log level '{}': {e}", config.level)))
}
