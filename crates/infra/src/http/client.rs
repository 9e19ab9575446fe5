use std::time::Duration;

use brighthub_domain::constants::DEFAULT_TIMEOUT_SECS;
use brighthub_domain::ApiError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

/// HTTP client with a fixed per-request timeout.
///
/// Requests are sent exactly once; failures are handed back to the caller.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder, bounded by the configured timeout.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP request: {err}")))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match tokio::time::timeout(self.timeout, self.client.execute(request)).await {
            Ok(Ok(response)) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Ok(Err(err)) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(self.map_transport_error(&err))
            }
            Err(_) => {
                debug!(%method, %url, timeout = ?self.timeout, "HTTP request timed out");
                Err(ApiError::Timeout(self.timeout))
            }
        }
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Network(format!("HTTP request failed: {err}"))
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let agent = self
            .user_agent
            .unwrap_or_else(|| concat!("brighthub/", env!("CARGO_PKG_VERSION")).to_string());
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(agent)
            .no_proxy()
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
