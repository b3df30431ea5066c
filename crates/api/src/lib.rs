//! # SDC App
//!
//! Composition root and command layer for the `sdc` binary.
//!
//! - `context`: loads configuration, installs tracing, and wires transport
//!   and navigator into an `ApiClient`
//! - `cli`: clap command definitions and their execution against the client

pub mod cli;
pub mod context;

pub use cli::{Cli, Command};
pub use context::AppContext;
