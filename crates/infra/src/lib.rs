//! # Brighthub Infrastructure
//!
//! I/O side of the Brighthub client.
//!
//! This crate contains:
//! - The HTTP transport with per-request deadlines
//! - The OAuth2 client-credentials token cache
//! - The account-scoped CMS and Dynamic Ingest operations
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Request and response types live in `brighthub-domain`
//! - Every operation sends exactly one request and maps non-success
//!   statuses through a per-operation table

pub mod api;
pub mod config;
pub mod http;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, AccessTokenResponse, BrighthubClient, BrighthubClientBuilder,
    CachedToken, ClientCredentialsAuth,
};
pub use http::{HttpClient, HttpClientBuilder};
