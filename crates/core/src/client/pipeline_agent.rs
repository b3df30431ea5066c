use sdc_domain::{
    ApiResponse, ConfigOverride, PipelineConfiguration, PreviewOptions, Result, SdcError,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::ApiClient;
use crate::duplication::PipelineDuplicator;
use crate::endpoints::pipeline as endpoints;

/// Pipeline library, preview, lifecycle, snapshot and rule operations
#[derive(Clone, Copy)]
pub struct PipelineAgentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PipelineAgentApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Collector configuration (`sdc.properties` values exposed to the UI)
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn configuration(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::configuration()).await
    }

    /// Stage and pipeline definitions
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn definitions(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::definitions()).await
    }

    /// Summary info for every pipeline in the library
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipelines(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::pipelines()).await
    }

    /// Full pipeline configuration; `None` or `""` fetches `xyz`
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipeline_config(&self, name: Option<&str>) -> Result<ApiResponse> {
        self.client.send(endpoints::pipeline_config(name)).await
    }

    /// Pipeline summary without stage definitions; `None` or `""` fetches `xyz`
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipeline_config_info(&self, name: Option<&str>) -> Result<ApiResponse> {
        self.client.send(endpoints::pipeline_config_info(name)).await
    }

    /// Persist a (possibly modified) pipeline configuration
    ///
    /// # Errors
    /// Returns `SdcError::InvalidRequest` if the payload cannot be serialised,
    /// otherwise the transport error or `SdcError::Http`.
    #[instrument(skip(self, config))]
    pub async fn save_pipeline_config<T>(&self, name: Option<&str>, config: &T) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized + Sync,
    {
        let body = encode(config)?;
        self.client.send(endpoints::save_pipeline_config(name, body)).await
    }

    /// Create an empty pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn create_pipeline_config(&self, name: &str, description: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::create_pipeline_config(name, description)).await
    }

    /// Remove a pipeline from the library
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn delete_pipeline_config(&self, name: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::delete_pipeline_config(name)).await
    }

    /// Copy `source` into a new pipeline called `name`.
    ///
    /// See [`PipelineDuplicator`] for the request sequence. Resolves with the
    /// saved configuration of the new pipeline.
    ///
    /// # Errors
    /// Returns the first failing step's error. Steps that already succeeded
    /// are not undone.
    #[instrument(skip(self))]
    pub async fn duplicate_pipeline_config(
        &self,
        name: &str,
        description: &str,
        source: &str,
    ) -> Result<PipelineConfiguration> {
        PipelineDuplicator::new(*self).duplicate(name, description, source).await
    }

    /// Open the export download for a pipeline in the user's browser
    ///
    /// # Errors
    /// Returns `SdcError::Platform` if the browser cannot be launched.
    pub fn export_pipeline_config(&self, name: Option<&str>) -> Result<()> {
        let path = endpoints::export_pipeline_config(name);
        info!(path = %path, "exporting pipeline");
        self.client.navigate(&path)
    }

    /// Metric, data and alert rules of a pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipeline_rules(&self, name: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::pipeline_rules(name)).await
    }

    /// Replace the rules of a pipeline
    ///
    /// # Errors
    /// Returns `SdcError::InvalidRequest` if the payload cannot be serialised,
    /// otherwise the transport error or `SdcError::Http`.
    #[instrument(skip(self, rules))]
    pub async fn save_pipeline_rules<T>(&self, name: &str, rules: &T) -> Result<ApiResponse>
    where
        T: Serialize + ?Sized + Sync,
    {
        let body = encode(rules)?;
        self.client.send(endpoints::save_pipeline_rules(name, body)).await
    }

    // -----------------------------------------------------------------------
    // Preview
    // -----------------------------------------------------------------------

    /// Start a preview run; the response carries the previewer id
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn create_preview(&self, name: &str, options: &PreviewOptions) -> Result<ApiResponse> {
        self.client.send(endpoints::create_preview(name, options)).await
    }

    /// State of a running preview
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn preview_status(&self, previewer_id: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::preview_status(previewer_id)).await
    }

    /// Captured output of a finished preview
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn preview_data(&self, previewer_id: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::preview_data(previewer_id)).await
    }

    /// Stop a running preview
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn cancel_preview(&self, previewer_id: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::cancel_preview(previewer_id)).await
    }

    /// Read raw data from the origin with the given configuration overrides
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self, overrides), fields(overrides = overrides.len()))]
    pub async fn raw_source_preview(
        &self,
        name: &str,
        rev: &str,
        overrides: &[ConfigOverride],
    ) -> Result<ApiResponse> {
        self.client.send(endpoints::raw_source_preview(name, rev, overrides)).await
    }

    // -----------------------------------------------------------------------
    // Lifecycle and monitoring
    // -----------------------------------------------------------------------

    /// Status of every pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn all_pipeline_status(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::all_pipeline_status()).await
    }

    /// Current status of one pipeline revision
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipeline_status(&self, name: &str, rev: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::pipeline_status(name, rev)).await
    }

    /// Ask the collector to validate a pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn validate_pipeline(&self, name: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::validate_pipeline(name)).await
    }

    /// Start a pipeline revision
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn start_pipeline(&self, name: &str, rev: &str) -> Result<ApiResponse> {
        info!("starting pipeline");
        self.client.send(endpoints::start_pipeline(name, rev)).await
    }

    /// Stop a pipeline revision
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn stop_pipeline(&self, name: &str, rev: &str) -> Result<ApiResponse> {
        info!("stopping pipeline");
        self.client.send(endpoints::stop_pipeline(name, rev)).await
    }

    /// Runtime metrics of a pipeline revision
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn pipeline_metrics(&self, name: &str, rev: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::pipeline_metrics(name, rev)).await
    }

    /// Error records of a stage instance, or of the whole pipeline when
    /// `stage_instance` is `None`
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn error_records(
        &self,
        name: &str,
        rev: &str,
        stage_instance: Option<&str>,
    ) -> Result<ApiResponse> {
        self.client.send(endpoints::error_records(name, rev, stage_instance)).await
    }

    /// Error messages of a stage instance, or of the whole pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn error_messages(
        &self,
        name: &str,
        rev: &str,
        stage_instance: Option<&str>,
    ) -> Result<ApiResponse> {
        self.client.send(endpoints::error_messages(name, rev, stage_instance)).await
    }

    /// Run history of a pipeline
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn history(&self, name: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::history(name)).await
    }

    /// Reset the origin offset so the next run starts from the beginning
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn reset_offset(&self, name: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::reset_offset(name)).await
    }

    /// Records sampled by a data rule
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn sampled_records(&self, name: &str, sampling_rule_id: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::sampled_records(name, sampling_rule_id)).await
    }

    /// Clear a triggered alert
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn delete_alert(&self, name: &str, rule_id: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::delete_alert(name, rule_id)).await
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// Snapshots available across all pipelines
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn snapshots_info(&self) -> Result<ApiResponse> {
        self.client.send(endpoints::snapshots_info()).await
    }

    /// Capture a snapshot of the next `batch_size` records
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn capture_snapshot(
        &self,
        name: &str,
        rev: &str,
        snapshot: &str,
        batch_size: u32,
    ) -> Result<ApiResponse> {
        self.client.send(endpoints::capture_snapshot(name, rev, snapshot, batch_size)).await
    }

    /// Capture progress of a snapshot
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn snapshot_status(&self, name: &str, rev: &str, snapshot: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::snapshot_status(name, rev, snapshot)).await
    }

    /// Contents of a captured snapshot
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, name: &str, rev: &str, snapshot: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::snapshot(name, rev, snapshot)).await
    }

    /// Delete a captured snapshot
    ///
    /// # Errors
    /// Returns the transport error, or `SdcError::Http` for a non-2xx reply.
    #[instrument(skip(self))]
    pub async fn delete_snapshot(&self, name: &str, rev: &str, snapshot: &str) -> Result<ApiResponse> {
        self.client.send(endpoints::delete_snapshot(name, rev, snapshot)).await
    }
}

fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload)
        .map_err(|err| SdcError::InvalidRequest(format!("failed to encode request body: {err}")))
}
