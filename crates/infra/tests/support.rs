//! Shared fixtures for the integration tests
//!
//! One `MockServer` stands in for the OAuth, CMS, ingest and ingestion hosts.

#![allow(dead_code)]

use brighthub_domain::{ClientConfig, Credentials};
use brighthub_infra::BrighthubClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT_ID: &str = "account-id-kamu";
pub const ACCESS_TOKEN: &str = "kucing-lucu";

/// Install a test subscriber once so `RUST_LOG` works while debugging tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new("client-id", "client-secret", ACCOUNT_ID)
}

/// Config pointing every host at the mock server
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        auth_base_url: server.uri(),
        cms_base_url: server.uri(),
        ingest_base_url: server.uri(),
        ingestion_base_url: server.uri(),
        ..Default::default()
    }
}

pub fn token_response(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": 300
    }))
}

/// Mount a token endpoint that answers any number of times
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/access_token"))
        .respond_with(token_response(ACCESS_TOKEN))
        .mount(server)
        .await;
}

/// Start a mock server with a token endpoint and connect a client to it
pub async fn connected_client() -> (MockServer, BrighthubClient) {
    init_tracing();
    let server = MockServer::start().await;
    mount_token(&server).await;

    let client = BrighthubClient::connect(credentials(), config_for(&server))
        .await
        .expect("client should connect against mock token endpoint");

    (server, client)
}

pub fn account_path(suffix: &str) -> String {
    format!("/accounts/{ACCOUNT_ID}{suffix}")
}
