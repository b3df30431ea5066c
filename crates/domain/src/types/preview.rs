//! Preview parameters

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_PREVIEW_BATCH_SIZE;

/// Parameters for starting a pipeline preview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Records per batch; `None` or `0` means the default of 10
    pub batch_size: Option<u32>,
    pub rev: String,
    pub skip_targets: bool,
    /// Stage outputs used to seed the preview; sent as `[]` when absent
    pub stage_outputs: Option<Vec<Value>>,
    /// Stop the preview after this stage instance
    pub end_stage: Option<String>,
}

impl PreviewOptions {
    #[must_use]
    pub fn new(rev: impl Into<String>) -> Self {
        Self { rev: rev.into(), ..Self::default() }
    }

    #[must_use]
    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    #[must_use]
    pub fn skip_targets(mut self, skip: bool) -> Self {
        self.skip_targets = skip;
        self
    }

    #[must_use]
    pub fn stage_outputs(mut self, outputs: Vec<Value>) -> Self {
        self.stage_outputs = Some(outputs);
        self
    }

    #[must_use]
    pub fn end_stage(mut self, stage: impl Into<String>) -> Self {
        self.end_stage = Some(stage.into());
        self
    }

    /// Batch size actually sent to the backend
    #[must_use]
    pub fn effective_batch_size(&self) -> u32 {
        match self.batch_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PREVIEW_BATCH_SIZE,
        }
    }
}

/// A named configuration override for raw source preview.
///
/// `value: None` means the value was never set; such entries are skipped,
/// while an explicit JSON `null` is still sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverride {
    pub name: Option<String>,
    pub value: Option<Value>,
}

impl ConfigOverride {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: Some(name.into()), value: Some(value.into()) }
    }

    /// Render as a `name=value` query pair, or `None` when the entry is
    /// incomplete.
    #[must_use]
    pub fn query_pair(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|name| !name.is_empty())?;
        let value = self.value.as_ref()?;
        Some(format!("{name}={}", render_query_value(value)))
    }
}

/// Render a JSON value the way the web console concatenates it into a URL.
fn render_query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // nulls inside arrays render as empty strings
                Value::Null => String::new(),
                other => render_query_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn zero_batch_size_uses_default() {
        assert_eq!(PreviewOptions::new("0").effective_batch_size(), 10);
        assert_eq!(PreviewOptions::new("0").batch_size(0).effective_batch_size(), 10);
        assert_eq!(PreviewOptions::new("0").batch_size(25).effective_batch_size(), 25);
    }

    #[test]
    fn incomplete_overrides_are_skipped() {
        let unnamed = ConfigOverride { name: None, value: Some(json!("x")) };
        let empty_name = ConfigOverride { name: Some(String::new()), value: Some(json!("x")) };
        let unset = ConfigOverride { name: Some("a".into()), value: None };

        assert_eq!(unnamed.query_pair(), None);
        assert_eq!(empty_name.query_pair(), None);
        assert_eq!(unset.query_pair(), None);
    }

    #[test]
    fn values_render_like_string_concatenation() {
        assert_eq!(ConfigOverride::new("a", "text").query_pair().unwrap(), "a=text");
        assert_eq!(ConfigOverride::new("b", 42).query_pair().unwrap(), "b=42");
        assert_eq!(ConfigOverride::new("c", false).query_pair().unwrap(), "c=false");
        assert_eq!(ConfigOverride::new("d", Value::Null).query_pair().unwrap(), "d=null");
        assert_eq!(
            ConfigOverride::new("e", json!(["x", 1, null])).query_pair().unwrap(),
            "e=x,1,"
        );
        assert_eq!(
            ConfigOverride::new("f", json!({ "k": 1 })).query_pair().unwrap(),
            "f=[object Object]"
        );
    }
}
