//! reqwest-backed implementation of the `Transport` port

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use sdc_core::Transport;
use sdc_domain::{ApiRequest, ApiResponse, ClientConfig, HttpMethod, Result, SdcError};
use tracing::{debug, instrument};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Sends catalog requests to a collector rooted at `base_url`.
#[derive(Clone, Debug)]
pub struct RestTransport {
    http_client: HttpClient,
    base_url: String,
}

impl RestTransport {
    /// Create a transport for the collector at `base_url`
    ///
    /// # Errors
    /// Returns `SdcError::InvalidRequest` if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, http_client: HttpClient) -> Result<Self> {
        Url::parse(base_url).map_err(|err| SdcError::from(InfraError::from(err)))?;

        Ok(Self { http_client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    /// Build the HTTP client and transport described by `config`
    ///
    /// # Errors
    /// Returns an error if a configured header is invalid, the HTTP client
    /// cannot be built, or the base URL does not parse.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder =
            HttpClient::builder().timeout(Duration::from_secs(config.timeout_seconds));

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        for (name, value) in &config.headers {
            builder = builder.header(name, value)?;
        }

        Self::new(&config.base_url, builder.build()?)
    }

    /// Absolute URL for a collector-relative path.
    ///
    /// The path is appended to the base URL rather than joined, so a base URL
    /// with its own context path (`https://host/sdc`) keeps it.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| SdcError::from(InfraError::from(err)))
    }
}

#[async_trait]
impl Transport for RestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.resolve(&request.path)?;

        let mut builder = self.http_client.request(to_reqwest_method(request.method), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = self.http_client.send(builder).await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.map_err(|err| SdcError::from(InfraError::from(err)))?;

        if status.is_success() {
            Ok(ApiResponse { status: status.as_u16(), content_type, body })
        } else {
            debug!(%status, "collector returned failure status");
            Err(SdcError::Http { status: status.as_u16(), body })
        }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> RestTransport {
        RestTransport::new(base_url, HttpClient::new().unwrap()).unwrap()
    }

    #[test]
    fn resolve_keeps_context_path() {
        let transport = transport("https://collector.example.com/sdc/");
        let url = transport.resolve("/rest/v1/pipelines/status").unwrap();
        assert_eq!(url.as_str(), "https://collector.example.com/sdc/rest/v1/pipelines/status");
    }

    #[test]
    fn resolve_keeps_query_string() {
        let transport = transport("http://localhost:18630");
        let url = transport.resolve("/rest/v1/pipeline/p1/status?rev=0").unwrap();
        assert_eq!(url.path(), "/rest/v1/pipeline/p1/status");
        assert_eq!(url.query(), Some("rev=0"));
    }

    #[test]
    fn rejects_relative_base_url() {
        let result = RestTransport::new("localhost", HttpClient::new().unwrap());
        assert!(matches!(result, Err(SdcError::InvalidRequest(_))));
    }

    #[test]
    fn from_config_rejects_bad_headers() {
        let mut config = ClientConfig::default();
        config.headers.insert("bad header".into(), "x".into());
        assert!(matches!(RestTransport::from_config(&config), Err(SdcError::Config(_))));
    }
}
