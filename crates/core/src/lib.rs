//! # SDC Core
//!
//! Endpoint catalog and client facade for the Data Collector REST API.
//!
//! This crate contains:
//! - Port interfaces (`Transport`, `Navigator`)
//! - Pure request builders, one per backend operation
//! - The `ApiClient` facade grouped into namespaces
//! - The pipeline duplication workflow
//!
//! ## Architecture Principles
//! - Only depends on `sdc-domain`
//! - No HTTP or platform code
//! - All I/O goes through injected ports

pub mod client;
pub mod duplication;
pub mod endpoints;
pub mod ports;

pub use client::{AdminApi, ApiClient, LogApi, PipelineAgentApi, TimeSeriesApi};
pub use duplication::PipelineDuplicator;
pub use ports::{Navigator, Transport};
