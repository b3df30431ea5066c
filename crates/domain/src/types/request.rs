//! Request and response descriptors exchanged with a transport

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, SdcError};

/// HTTP verbs used by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single endpoint call: verb, path (with query string) and optional JSON
/// body. Built per invocation and handed to a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the collector root, including the query string
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), body: None }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), body: None }
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Put, path: path.into(), body: None }
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Delete, path: path.into(), body: None }
    }

    /// Attach a JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Successful backend response, forwarded without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: None, body: body.into() }
    }

    /// Build a response carrying a JSON payload
    #[must_use]
    pub fn json_body(status: u16, body: &Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    /// Returns `SdcError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|err| {
            SdcError::Decode(format!("failed to decode response body (status {}): {err}", self.status))
        })
    }

    /// Body as received
    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }
}
