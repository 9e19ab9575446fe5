//! Authenticated client for the CMS and Dynamic Ingest APIs
//!
//! Every operation follows the same sequence: obtain a bearer token, build
//! the request, send it once, compare the status with the operation's single
//! success code, then decode the body. Non-success statuses are translated by
//! the operation's table in [`super::errors`].

use std::sync::Arc;

use brighthub_domain::{ApiError, BrighthubConfig, ClientConfig, Credentials};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use super::auth::{AccessTokenProvider, ClientCredentialsAuth};
use super::errors::StatusMapper;
use crate::http::HttpClient;

/// API host an operation talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Host {
    Cms,
    Ingest,
    Ingestion,
}

/// Client bound to one Brightcove account
pub struct BrighthubClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    account_id: String,
    config: ClientConfig,
}

impl BrighthubClient {
    /// Connect with client credentials
    ///
    /// Fetches the first access token before returning, so invalid
    /// credentials fail here rather than on the first operation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Auth` if the initial token cannot be obtained, or
    /// `ApiError::Config` if the HTTP client cannot be built.
    #[instrument(skip_all, fields(account_id = %credentials.account_id))]
    pub async fn connect(credentials: Credentials, config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = transport_for(&config)?;
        let account_id = credentials.account_id.clone();
        let auth = Arc::new(ClientCredentialsAuth::new(
            credentials,
            &config.auth_base_url,
            http_client.clone(),
        ));

        Self::builder()
            .config(config)
            .account_id(account_id)
            .auth(auth)
            .http_client(http_client)
            .build()
            .await
    }

    /// Connect using a loaded [`BrighthubConfig`]
    pub async fn from_config(config: BrighthubConfig) -> Result<Self, ApiError> {
        Self::connect(config.credentials, config.client).await
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> BrighthubClientBuilder {
        BrighthubClientBuilder::default()
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current bearer token, refreshed first if stale
    pub async fn access_token(&self) -> Result<String, ApiError> {
        self.auth.access_token().await
    }

    /// Build `{host}/accounts/{account_id}{path}`
    pub(crate) fn account_url(&self, host: Host, path: &str) -> String {
        let base = match host {
            Host::Cms => &self.config.cms_base_url,
            Host::Ingest => &self.config.ingest_base_url,
            Host::Ingestion => &self.config.ingestion_base_url,
        };
        format!(
            "{}/accounts/{}{}",
            base.trim_end_matches('/'),
            urlencoding::encode(&self.account_id),
            path
        )
    }

    /// Execute a GET request and decode the body
    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        url: &str,
        expected: StatusCode,
        map_status: StatusMapper,
    ) -> Result<R, ApiError> {
        let response = self.send(Method::GET, url, None, expected, map_status).await?;
        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body and decode the response
    pub(crate) async fn post<T: Serialize, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &T,
        expected: StatusCode,
        map_status: StatusMapper,
    ) -> Result<R, ApiError> {
        let body = serde_json::to_vec(body)
            .map_err(|e| ApiError::Serialization(format!("Failed to serialize body: {}", e)))?;
        let response = self.send(Method::POST, url, Some(body), expected, map_status).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request without a body, ignoring the response body
    pub(crate) async fn put_empty(
        &self,
        url: &str,
        expected: StatusCode,
        map_status: StatusMapper,
    ) -> Result<(), ApiError> {
        self.send(Method::PUT, url, None, expected, map_status).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        expected: StatusCode,
        map_status: StatusMapper,
    ) -> Result<Response, ApiError> {
        let token = self.auth.access_token().await?;

        debug!(%method, url = %url, "API request");

        let mut request = self
            .http_client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = self.http_client.send(request).await?;

        let status = response.status();
        if status != expected {
            warn!(
                url = %url,
                status = status.as_u16(),
                expected = expected.as_u16(),
                "API returned unexpected status"
            );
            return Err(map_status(status));
        }

        Ok(response)
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }
}

/// Builder for API client
#[derive(Default)]
pub struct BrighthubClientBuilder {
    config: Option<ClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    account_id: Option<String>,
    http_client: Option<HttpClient>,
}

impl BrighthubClientBuilder {
    /// Set the endpoint configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the account every request is scoped to
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Share an existing transport instead of building one from the config
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the client and acquire the first access token
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if a required field is missing, or the
    /// provider's error if the initial token cannot be obtained.
    pub async fn build(self) -> Result<BrighthubClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;
        let account_id =
            self.account_id.ok_or_else(|| ApiError::Config("Account id not set".to_string()))?;
        let http_client = match self.http_client {
            Some(client) => client,
            None => transport_for(&config)?,
        };

        auth.access_token().await.inspect_err(|err| {
            error!(account_id = %account_id, error = %err, "initial access token acquisition failed");
        })?;

        info!(account_id = %account_id, "Brightcove client ready");
        Ok(BrighthubClient { http_client, auth, account_id, config })
    }
}

/// Build the HTTP transport described by a [`ClientConfig`]
fn transport_for(config: &ClientConfig) -> Result<HttpClient, ApiError> {
    let mut builder = HttpClient::builder().timeout(config.timeout());
    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent.clone());
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::errors::create_video_error;

    #[derive(Clone)]
    struct MockAuthProvider {
        token: String,
    }

    #[async_trait]
    impl AccessTokenProvider for MockAuthProvider {
        async fn access_token(&self) -> Result<String, ApiError> {
            Ok(self.token.clone())
        }
    }

    struct FailingAuthProvider;

    #[async_trait]
    impl AccessTokenProvider for FailingAuthProvider {
        async fn access_token(&self) -> Result<String, ApiError> {
            Err(ApiError::Auth("token endpoint unreachable".to_string()))
        }
    }

    #[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    async fn test_client(server: &MockServer) -> BrighthubClient {
        let config = ClientConfig {
            cms_base_url: server.uri(),
            ingest_base_url: server.uri(),
            ingestion_base_url: server.uri(),
            ..Default::default()
        };

        BrighthubClient::builder()
            .config(config)
            .account_id("acc-1")
            .auth(Arc::new(MockAuthProvider { token: "test-token".to_string() }))
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_builder_missing_auth() {
        let result = BrighthubClient::builder().account_id("acc-1").build().await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_builder_missing_account() {
        let result = BrighthubClient::builder()
            .auth(Arc::new(MockAuthProvider { token: "t".to_string() }))
            .build()
            .await;
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn test_builder_fails_without_initial_token() {
        let result =
            BrighthubClient::builder().account_id("acc-1").auth(Arc::new(FailingAuthProvider)).build().await;
        assert!(matches!(result, Err(ApiError::Auth(_))));
    }

    #[tokio::test]
    async fn test_account_url_per_host() {
        let server = MockServer::start().await;
        let client = test_client(&server).await;

        assert_eq!(
            client.account_url(Host::Cms, "/videos"),
            format!("{}/accounts/acc-1/videos", server.uri())
        );
        assert_eq!(
            client.account_url(Host::Ingestion, "/profiles/p"),
            format!("{}/accounts/acc-1/profiles/p", server.uri())
        );
    }

    #[tokio::test]
    async fn test_get_attaches_bearer_and_json_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(TestResponse { message: "success".to_string() }),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let url = format!("{}/test", mock_server.uri());

        let result: TestResponse =
            client.get(&url, StatusCode::OK, create_video_error).await.unwrap();
        assert_eq!(result.message, "success");
    }

    #[tokio::test]
    async fn test_other_success_code_is_undefined() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "created".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let url = format!("{}/create", mock_server.uri());

        let result: Result<TestResponse, ApiError> = client
            .post(&url, &serde_json::json!({"data": "x"}), StatusCode::CREATED, create_video_error)
            .await;
        assert_eq!(result.unwrap_err(), ApiError::Undefined(200));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let url = format!("{}/broken", mock_server.uri());

        let result: Result<TestResponse, ApiError> =
            client.get(&url, StatusCode::OK, create_video_error).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
