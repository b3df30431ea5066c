//! # SDC Domain
//!
//! Domain types shared by every layer of the Data Collector client.
//!
//! This crate contains:
//! - Request/response descriptors exchanged with a transport
//! - Pipeline configuration and rules payloads
//! - Domain error types and Result definitions
//! - Client configuration structures
//! - REST path constants
//!
//! ## Architecture
//! - No dependencies on other SDC crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
