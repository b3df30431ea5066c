//! Pipeline library, preview, lifecycle and snapshot endpoints

use sdc_domain::constants::API_BASE;
use sdc_domain::{ApiRequest, ConfigOverride, PreviewOptions};
use serde_json::Value;

use super::name_or_default;

/// Collector configuration exposed to the UI
#[must_use]
pub fn configuration() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/configuration/all"))
}

/// Stage and pipeline configuration definitions
#[must_use]
pub fn definitions() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/definitions"))
}

/// Summary info for every pipeline in the library
#[must_use]
pub fn pipelines() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline-library"))
}

// ---------------------------------------------------------------------------
// Pipeline library
// ---------------------------------------------------------------------------

#[must_use]
pub fn pipeline_config(name: Option<&str>) -> ApiRequest {
    ApiRequest::get(library_path(name))
}

/// Summary information only (no stages)
#[must_use]
pub fn pipeline_config_info(name: Option<&str>) -> ApiRequest {
    ApiRequest::get(format!("{}?get=info", library_path(name)))
}

#[must_use]
pub fn save_pipeline_config(name: Option<&str>, config: Value) -> ApiRequest {
    ApiRequest::post(library_path(name)).with_body(config)
}

/// Create an empty pipeline; the description is sent unescaped
#[must_use]
pub fn create_pipeline_config(name: &str, description: &str) -> ApiRequest {
    ApiRequest::put(format!("{API_BASE}/pipeline-library/{name}?description={description}"))
}

#[must_use]
pub fn delete_pipeline_config(name: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_BASE}/pipeline-library/{name}"))
}

/// Download path for an exported pipeline. Opened by a navigator rather than
/// sent through the transport.
#[must_use]
pub fn export_pipeline_config(name: Option<&str>) -> String {
    format!("{}?attachment=true", library_path(name))
}

#[must_use]
pub fn pipeline_rules(name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline-library/{name}/rules"))
}

#[must_use]
pub fn save_pipeline_rules(name: &str, rules: Value) -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/pipeline-library/{name}/rules")).with_body(rules)
}

fn library_path(name: Option<&str>) -> String {
    format!("{API_BASE}/pipeline-library/{}", name_or_default(name))
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[must_use]
pub fn create_preview(name: &str, options: &PreviewOptions) -> ApiRequest {
    let mut path = format!(
        "{API_BASE}/preview/{name}/create?batchSize={}&rev={}&skipTargets={}",
        options.effective_batch_size(),
        options.rev,
        options.skip_targets
    );

    if let Some(end_stage) = options.end_stage.as_deref().filter(|stage| !stage.is_empty()) {
        path.push_str("&endStage=");
        path.push_str(end_stage);
    }

    let stage_outputs = options.stage_outputs.clone().unwrap_or_default();
    ApiRequest::post(path).with_body(Value::Array(stage_outputs))
}

#[must_use]
pub fn preview_status(previewer_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/preview-id/{previewer_id}/status"))
}

#[must_use]
pub fn preview_data(previewer_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/preview-id/{previewer_id}"))
}

#[must_use]
pub fn cancel_preview(previewer_id: &str) -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/preview-id/{previewer_id}/cancel"))
}

/// Raw source preview; one `&name=value` pair per complete override, in order
#[must_use]
pub fn raw_source_preview(name: &str, rev: &str, overrides: &[ConfigOverride]) -> ApiRequest {
    let mut path = format!("{API_BASE}/preview/{name}/rawSourcePreview?rev={rev}");

    for pair in overrides.iter().filter_map(ConfigOverride::query_pair) {
        path.push('&');
        path.push_str(&pair);
    }

    ApiRequest::get(path)
}

// ---------------------------------------------------------------------------
// Lifecycle and monitoring
// ---------------------------------------------------------------------------

/// Status of every pipeline
#[must_use]
pub fn all_pipeline_status() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipelines/status"))
}

#[must_use]
pub fn pipeline_status(name: &str, rev: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/status?rev={rev}"))
}

#[must_use]
pub fn validate_pipeline(name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/validate"))
}

#[must_use]
pub fn start_pipeline(name: &str, rev: &str) -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/pipeline/{name}/start?rev={rev}"))
}

#[must_use]
pub fn stop_pipeline(name: &str, rev: &str) -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/pipeline/{name}/stop?rev={rev}"))
}

#[must_use]
pub fn pipeline_metrics(name: &str, rev: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/metrics?rev={rev}"))
}

/// Error records for one stage instance, or for the whole pipeline
#[must_use]
pub fn error_records(name: &str, rev: &str, stage_instance: Option<&str>) -> ApiRequest {
    ApiRequest::get(stage_filtered_path(name, "errorRecords", rev, stage_instance))
}

#[must_use]
pub fn error_messages(name: &str, rev: &str, stage_instance: Option<&str>) -> ApiRequest {
    ApiRequest::get(stage_filtered_path(name, "errorMessages", rev, stage_instance))
}

fn stage_filtered_path(
    name: &str,
    resource: &str,
    rev: &str,
    stage_instance: Option<&str>,
) -> String {
    let mut path = format!("{API_BASE}/pipeline/{name}/{resource}?rev={rev}");
    if let Some(stage) = stage_instance {
        path.push_str("&stageInstanceName=");
        path.push_str(stage);
    }
    path
}

/// Run history across all revisions
#[must_use]
pub fn history(name: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/history"))
}

#[must_use]
pub fn reset_offset(name: &str) -> ApiRequest {
    ApiRequest::post(format!("{API_BASE}/pipeline/{name}/resetOffset"))
}

#[must_use]
pub fn sampled_records(name: &str, sampling_rule_id: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/sampledRecords?sampleId={sampling_rule_id}"))
}

#[must_use]
pub fn delete_alert(name: &str, rule_id: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_BASE}/pipeline/{name}/alerts?alertId={rule_id}"))
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[must_use]
pub fn snapshots_info() -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipelines/snapshots"))
}

/// Capture the next `batch_size` records into `snapshot`
#[must_use]
pub fn capture_snapshot(name: &str, rev: &str, snapshot: &str, batch_size: u32) -> ApiRequest {
    ApiRequest::put(format!(
        "{API_BASE}/pipeline/{name}/snapshot/{snapshot}?batchSize={batch_size}&rev={rev}"
    ))
}

#[must_use]
pub fn snapshot_status(name: &str, rev: &str, snapshot: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/snapshot/{snapshot}/status?rev={rev}"))
}

#[must_use]
pub fn snapshot(name: &str, rev: &str, snapshot: &str) -> ApiRequest {
    ApiRequest::get(format!("{API_BASE}/pipeline/{name}/snapshot/{snapshot}?rev={rev}"))
}

#[must_use]
pub fn delete_snapshot(name: &str, rev: &str, snapshot: &str) -> ApiRequest {
    ApiRequest::delete(format!("{API_BASE}/pipeline/{name}/snapshot/{snapshot}?rev={rev}"))
}
