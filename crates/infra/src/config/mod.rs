//! Configuration loading
//!
//! Resolves a [`sdc_domain::ClientConfig`] from environment variables or a
//! config file.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, search_config_paths, ConfigSource};
