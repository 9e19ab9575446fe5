//! Client-credentials authentication with a cached bearer token
//!
//! Brightcove access tokens live for five minutes. [`ClientCredentialsAuth`]
//! reuses a token for at most four minutes after acquisition and fetches a new
//! one on the first call after that window.

use async_trait::async_trait;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use brighthub_domain::constants::ACCESS_TOKEN_TTL_SECS;
use brighthub_domain::{ApiError, Credentials};
use chrono::{DateTime, Utc};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument};

use crate::http::HttpClient;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// This method should handle token refresh if needed.
    async fn access_token(&self) -> Result<String, ApiError>;
}

/// Body returned by `POST /access_token`
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// A bearer token and the moment it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub access_token: String,
    pub acquired_at: DateTime<Utc>,
}

impl CachedToken {
    /// Wrap a token acquired just now
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), acquired_at: Utc::now() }
    }

    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.acquired_at
    }

    /// Whether the token is still inside the reuse window
    pub fn is_fresh(&self) -> bool {
        self.age() <= chrono::Duration::seconds(ACCESS_TOKEN_TTL_SECS)
    }
}

/// OAuth2 client-credentials token source with a single cached token
///
/// The cache lock is held across the refresh round-trip, so concurrent
/// callers hitting a stale token trigger one token request between them.
pub struct ClientCredentialsAuth {
    http_client: HttpClient,
    credentials: Credentials,
    token_url: String,
    cached: Mutex<Option<CachedToken>>,
}

impl ClientCredentialsAuth {
    /// Create an auth source that has not fetched a token yet
    ///
    /// # Arguments
    ///
    /// * `credentials` - Client id/secret used for HTTP Basic auth
    /// * `auth_base_url` - OAuth host, e.g. `https://oauth.brightcove.com/v4`
    /// * `http_client` - Transport shared with the API operations
    pub fn new(credentials: Credentials, auth_base_url: &str, http_client: HttpClient) -> Self {
        let token_url = format!(
            "{}/access_token?grant_type=client_credentials",
            auth_base_url.trim_end_matches('/')
        );

        Self { http_client, credentials, token_url, cached: Mutex::new(None) }
    }

    /// Seed the cache, e.g. with a token persisted by a previous process
    pub fn with_cached_token(self, token: CachedToken) -> Self {
        Self { cached: Mutex::new(Some(token)), ..self }
    }

    /// Snapshot of the cached token, without refreshing
    pub async fn cached_token(&self) -> Option<CachedToken> {
        self.cached.lock().await.clone()
    }

    /// Return the cached token, fetching a new one if it is missing or stale
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Auth` if the token request fails or its body cannot
    /// be decoded. The cache is left untouched in that case.
    #[instrument(skip(self), fields(client_id = %self.credentials.client_id))]
    pub async fn valid_token(&self) -> Result<String, ApiError> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref().filter(|token| token.is_fresh()) {
            return Ok(token.access_token.clone());
        }

        debug!("access token missing or stale, requesting a new one");
        let response = self.request_token().await?;
        let token = CachedToken::new(response.access_token);
        let access_token = token.access_token.clone();
        *cached = Some(token);

        info!(expires_in = ?response.expires_in, "access token acquired");
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<AccessTokenResponse, ApiError> {
        let basic = BASE64_STANDARD.encode(format!(
            "{}:{}",
            self.credentials.client_id, self.credentials.client_secret
        ));

        let request = self
            .http_client
            .request(Method::POST, &self.token_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(AUTHORIZATION, format!("Basic {basic}"));

        let response = self.http_client.send(request).await.map_err(|err| {
            error!(client_id = %self.credentials.client_id, error = %err, "access token request failed");
            ApiError::Auth(format!("token request failed: {err}"))
        })?;

        // Status is not checked: an error body simply fails to decode.
        response.json::<AccessTokenResponse>().await.map_err(|err| {
            error!(client_id = %self.credentials.client_id, error = %err, "failed to decode access token response");
            ApiError::Auth(format!("failed to decode token response: {err}"))
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsAuth {
    async fn access_token(&self) -> Result<String, ApiError> {
        self.valid_token().await
    }
}
