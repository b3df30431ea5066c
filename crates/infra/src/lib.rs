//! # SDC Infrastructure
//!
//! Adapters for the ports defined in `sdc-core`:
//! - `RestTransport`: reqwest-backed `Transport`
//! - `SystemNavigator`: platform browser launcher behind `Navigator`
//! - configuration loading and tracing setup
//!
//! All I/O lives here; `sdc-core` stays pure.

pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod platform;
pub mod transport;

pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
pub use platform::{Opener, SystemNavigator};
pub use transport::RestTransport;
