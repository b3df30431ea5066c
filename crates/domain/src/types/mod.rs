//! Domain types and models

pub mod pipeline;
pub mod preview;
pub mod request;

pub use pipeline::{PipelineConfiguration, PipelineRules};
pub use preview::{ConfigOverride, PreviewOptions};
pub use request::{ApiRequest, ApiResponse, HttpMethod};
