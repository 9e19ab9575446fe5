//! Brightcove API client
//!
//! This module provides the authenticated HTTP client for the CMS, Dynamic
//! Ingest and Ingest Profiles APIs.
//!
//! # Architecture
//!
//! - `auth`: client-credentials token source with a 4-minute cache
//! - `client`: `BrighthubClient`, request construction and status checks
//! - `cms` / `ingest`: the public operations
//! - `errors`: per-operation HTTP status tables
//!
//! Requests are sent once; there is no retry, backoff or circuit breaking.

pub mod auth;
pub mod client;
pub mod cms;
pub mod errors;
pub mod ingest;

pub use auth::{AccessTokenProvider, AccessTokenResponse, CachedToken, ClientCredentialsAuth};
pub use client::{BrighthubClient, BrighthubClientBuilder};
