use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use sdc_domain::constants::DEFAULT_TIMEOUT_SECONDS;
use sdc_domain::SdcError;
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with a request timeout and default headers.
///
/// Every request is sent exactly once; failures surface to the caller.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    #[must_use]
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, SdcError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, SdcError> {
        let request = builder.build().map_err(|err| SdcError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: HeaderMap,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            default_headers: HeaderMap::new(),
        }
    }
}

impl HttpClientBuilder {
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a single default header from string parts.
    ///
    /// # Errors
    /// Returns `SdcError::Config` if the name or value is not a valid header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, SdcError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| SdcError::Config(format!("invalid header name '{name}': {err}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| SdcError::Config(format!("invalid value for header '{name}': {err}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    pub fn build(self) -> Result<HttpClient, SdcError> {
        let mut builder = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            SdcError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
