//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SDC_BASE_URL` is set. Any other invalid
//!    `SDC_*` value is then an error, not a reason to fall back.
//! 2. Otherwise the first config file found by [`search_config_paths`]
//!
//! ## Environment Variables
//! - `SDC_BASE_URL`: collector root URL (required)
//! - `SDC_TIMEOUT_SECONDS`: request timeout in seconds
//! - `SDC_USER_AGENT`: user agent sent with every request
//! - `SDC_LOG_LEVEL`: `EnvFilter` directive
//! - `SDC_LOG_JSON`: emit JSON logs (true/false)
//!
//! ## File Locations
//! `sdc.toml`, `sdc.json`, `config.toml` and `config.json` are searched in the
//! current directory, its two parents, then next to the executable.

use std::fmt;
use std::path::{Path, PathBuf};

use sdc_domain::constants::DEFAULT_TIMEOUT_SECONDS;
use sdc_domain::{ClientConfig, LoggingConfig, Result, SdcError};

const CONFIG_FILE_NAMES: [&str; 4] = ["sdc.toml", "sdc.json", "config.toml", "config.json"];

const BASE_URL_VAR: &str = "SDC_BASE_URL";

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Environment,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => f.write_str("environment"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load configuration, preferring the environment over files
///
/// The environment wins whenever `SDC_BASE_URL` is set; config files are only
/// searched when it is absent.
///
/// # Errors
/// Returns `SdcError::Config` if the environment holds an invalid value, or
/// if `SDC_BASE_URL` is unset and no valid config file is found.
pub fn load() -> Result<(ClientConfig, ConfigSource)> {
    if std::env::var_os(BASE_URL_VAR).is_some() {
        return load_from_env().map(|config| (config, ConfigSource::Environment));
    }

    let path = search_config_paths().ok_or_else(|| {
        SdcError::Config(format!("{BASE_URL_VAR} is not set and no config file was found"))
    })?;
    let config = load_from_file(Some(path.clone()))?;
    Ok((config, ConfigSource::File(path)))
}

/// Load configuration from `SDC_*` environment variables
///
/// # Errors
/// Returns `SdcError::Config` if `SDC_BASE_URL` is missing or
/// `SDC_TIMEOUT_SECONDS` is not a number.
pub fn load_from_env() -> Result<ClientConfig> {
    let base_url = env_var(BASE_URL_VAR)?;

    let timeout_seconds = match std::env::var("SDC_TIMEOUT_SECONDS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| SdcError::Config(format!("Invalid timeout '{raw}': {e}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    let mut logging = LoggingConfig::default();
    if let Ok(level) = std::env::var("SDC_LOG_LEVEL") {
        logging.level = level;
    }
    logging.json = env_bool("SDC_LOG_JSON", false);

    Ok(ClientConfig {
        base_url,
        timeout_seconds,
        user_agent: std::env::var("SDC_USER_AGENT").ok(),
        logging,
        ..ClientConfig::default()
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, the standard locations are searched.
///
/// # Errors
/// Returns `SdcError::Config` if the file is missing, unreadable, or does
/// not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SdcError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => search_config_paths().ok_or_else(|| {
            SdcError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SdcError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SdcError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SdcError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(SdcError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations, if any.
pub fn search_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|candidate| candidate.is_file())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| SdcError::Config(format!("Missing required environment variable: {key}")))
}

/// Accepts `1`/`true`/`yes`/`on` (case-insensitive) as true.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
