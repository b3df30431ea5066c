//! Command-line definitions for the `sdc` binary

use clap::{Parser, Subcommand};
use sdc_core::ApiClient;
use sdc_domain::{Result, SdcError};
use tracing::instrument;

/// Data Collector client
#[derive(Debug, Parser)]
#[command(
    name = "sdc",
    about = "Command-line client for the Data Collector REST API",
    version,
    after_help = "CONFIGURATION:\n    SDC_BASE_URL, SDC_TIMEOUT_SECONDS, SDC_USER_AGENT, SDC_LOG_LEVEL, SDC_LOG_JSON,\n    or sdc.toml / sdc.json in the working directory"
)]
pub struct Cli {
    /// Subcommand to execute; help is printed when absent
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// `sdc` subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show pipeline status
    Status {
        /// Pipeline name
        name: String,

        /// Pipeline revision
        #[arg(default_value = "0")]
        rev: String,
    },

    /// List pipeline configurations
    Pipelines,

    /// List stage definitions
    Definitions,

    /// Show collector build information
    BuildInfo,

    /// Validate a pipeline
    Validate {
        /// Pipeline name
        name: String,
    },

    /// Start a pipeline
    Start {
        /// Pipeline name
        name: String,

        /// Pipeline revision
        #[arg(default_value = "0")]
        rev: String,
    },

    /// Stop a pipeline
    Stop {
        /// Pipeline name
        name: String,

        /// Pipeline revision
        #[arg(default_value = "0")]
        rev: String,
    },

    /// Copy a pipeline and its rules under a new name
    Duplicate {
        /// Pipeline to copy
        source: String,

        /// Name of the new pipeline
        name: String,

        /// Description of the new pipeline
        #[arg(default_value = "")]
        description: String,
    },

    /// Download a pipeline definition in the browser
    Export {
        /// Pipeline name
        name: String,
    },
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::Pipelines => "pipelines",
            Self::Definitions => "definitions",
            Self::BuildInfo => "build-info",
            Self::Validate { .. } => "validate",
            Self::Start { .. } => "start",
            Self::Stop { .. } => "stop",
            Self::Duplicate { .. } => "duplicate",
            Self::Export { .. } => "export",
        }
    }

    /// Run the command and return the text to print
    ///
    /// Response bodies are returned as the collector sent them.
    ///
    /// # Errors
    /// Propagates the client's error unchanged.
    #[instrument(skip(client), fields(command = self.label()))]
    pub async fn execute(&self, client: &ApiClient) -> Result<String> {
        let agent = client.pipeline_agent();

        let response = match self {
            Self::Status { name, rev } => agent.pipeline_status(name, rev).await?,
            Self::Pipelines => agent.pipelines().await?,
            Self::Definitions => agent.definitions().await?,
            Self::BuildInfo => client.admin().build_info().await?,
            Self::Validate { name } => agent.validate_pipeline(name).await?,
            Self::Start { name, rev } => agent.start_pipeline(name, rev).await?,
            Self::Stop { name, rev } => agent.stop_pipeline(name, rev).await?,
            Self::Duplicate { source, name, description } => {
                let saved = agent.duplicate_pipeline_config(name, description, source).await?;
                return serde_json::to_string_pretty(&saved).map_err(SdcError::from);
            }
            Self::Export { name } => {
                agent.export_pipeline_config(Some(name))?;
                return Ok(format!("Opened export of pipeline '{name}' in the browser"));
            }
        };

        Ok(response.text().to_string())
    }
}
