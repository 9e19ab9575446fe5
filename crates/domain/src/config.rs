//! Configuration management

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_AUTH_BASE_URL, DEFAULT_CMS_BASE_URL, DEFAULT_INGESTION_BASE_URL,
    DEFAULT_INGEST_BASE_URL, DEFAULT_TIMEOUT_SECS,
};

/// OAuth client credentials and the account they act on
///
/// The secret is never serialized. A serialized config therefore reloads
/// with an empty secret, which the config loader rejects by name.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    #[serde(default, skip_serializing)]
    pub client_secret: String,
    pub account_id: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            account_id: account_id.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

/// Endpoint and transport settings for a client instance
///
/// Base URLs are per-instance so that tests can point a client at mock
/// servers without affecting other clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// OAuth host serving `/access_token`
    pub auth_base_url: String,
    /// CMS API host (videos, folders, digital masters)
    pub cms_base_url: String,
    /// Dynamic Ingest API host (ingest requests)
    pub ingest_base_url: String,
    /// Ingest Profiles API host
    pub ingestion_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// `User-Agent` header override; `brighthub/<version>` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            cms_base_url: DEFAULT_CMS_BASE_URL.to_string(),
            ingest_base_url: DEFAULT_INGEST_BASE_URL.to_string(),
            ingestion_base_url: DEFAULT_INGESTION_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

/// Complete configuration as loaded from the environment or a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrighthubConfig {
    pub credentials: Credentials,
    #[serde(default)]
    pub client: ClientConfig,
}
