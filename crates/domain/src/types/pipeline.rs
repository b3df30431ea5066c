//! Pipeline configuration and rules payloads
//!
//! The backend owns the full schema of both objects. Only the fields the
//! client copies during duplication are named here; everything else rides
//! along untouched in a flattened passthrough map.
//!
//! Named fields distinguish "absent" (`None`, omitted on serialization) from
//! an explicit JSON `null` (`Some(Value::Null)`), so a payload serializes
//! back to exactly the keys it arrived with.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Pipeline configuration as stored in the pipeline library
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfiguration {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub ui_info: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub error_stage: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub stages: Option<Value>,
    /// Every other field returned by the backend (name, uuid, info, issues, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineConfiguration {
    /// Copy the pipeline definition (configuration, UI info, error stage and
    /// stages) from `source`, leaving identity fields untouched.
    ///
    /// A field missing from `source` ends up missing here as well.
    pub fn adopt_definition(&mut self, source: &Self) {
        self.configuration.clone_from(&source.configuration);
        self.ui_info.clone_from(&source.ui_info);
        self.error_stage.clone_from(&source.error_stage);
        self.stages.clone_from(&source.stages);
    }

    /// Look up a passthrough field
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Metric and data rules attached to a pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRules {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub metrics_rule_definitions: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub data_rule_definitions: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub email_ids: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineRules {
    /// Copy metric rules, data rules and alert recipients from `source`.
    pub fn adopt_rules(&mut self, source: &Self) {
        self.metrics_rule_definitions.clone_from(&source.metrics_rule_definitions);
        self.data_rule_definitions.clone_from(&source.data_rule_definitions);
        self.email_ids.clone_from(&source.email_ids);
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let raw = json!({
            "name": "p1",
            "uuid": "1234",
            "configuration": [{ "name": "executionMode", "value": "STANDALONE" }],
            "uiInfo": { "label": "P1" },
            "errorStage": null,
            "stages": [],
            "info": { "lastModifier": "admin" }
        });

        let config: PipelineConfiguration = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(config.field("uuid"), Some(&json!("1234")));
        assert_eq!(config.ui_info, Some(json!({ "label": "P1" })));
        assert_eq!(config.error_stage, Some(Value::Null));
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn adopt_definition_keeps_target_identity() {
        let source: PipelineConfiguration = serde_json::from_value(json!({
            "name": "source",
            "configuration": [1],
            "uiInfo": { "x": 1 },
            "errorStage": { "instanceName": "discard" },
            "stages": [{ "instanceName": "s1" }]
        }))
        .unwrap();
        let mut target: PipelineConfiguration =
            serde_json::from_value(json!({ "name": "target", "uuid": "fresh", "stages": [] }))
                .unwrap();

        target.adopt_definition(&source);

        assert_eq!(target.field("name"), Some(&json!("target")));
        assert_eq!(target.field("uuid"), Some(&json!("fresh")));
        assert_eq!(target.stages, Some(json!([{ "instanceName": "s1" }])));
        assert_eq!(target.error_stage, Some(json!({ "instanceName": "discard" })));
    }

    #[test]
    fn adopt_rules_copies_only_rule_fields() {
        let source: PipelineRules = serde_json::from_value(json!({
            "metricsRuleDefinitions": [{ "id": "m1" }],
            "dataRuleDefinitions": [{ "id": "d1" }],
            "emailIds": ["ops@example.com"],
            "uuid": "source-rules"
        }))
        .unwrap();
        let mut target: PipelineRules =
            serde_json::from_value(json!({ "uuid": "target-rules" })).unwrap();

        target.adopt_rules(&source);

        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["uuid"], json!("target-rules"));
        assert_eq!(value["metricsRuleDefinitions"], json!([{ "id": "m1" }]));
        assert_eq!(value["emailIds"], json!(["ops@example.com"]));
    }

    #[test]
    fn absent_fields_stay_absent() {
        let raw = json!({ "name": "P2" });

        let config: PipelineConfiguration = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(config.ui_info, None);
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);

        let rules: PipelineRules = serde_json::from_value(json!({ "uuid": "r" })).unwrap();
        assert_eq!(serde_json::to_value(&rules).unwrap(), json!({ "uuid": "r" }));
    }

    #[test]
    fn adopting_from_sparse_source_drops_fields() {
        let source: PipelineConfiguration =
            serde_json::from_value(json!({ "configuration": "A", "stages": "D" })).unwrap();
        let mut target: PipelineConfiguration = serde_json::from_value(json!({
            "name": "P2",
            "uiInfo": {},
            "errorStage": null
        }))
        .unwrap();

        target.adopt_definition(&source);

        assert_eq!(
            serde_json::to_value(&target).unwrap(),
            json!({ "name": "P2", "configuration": "A", "stages": "D" })
        );
    }
}
