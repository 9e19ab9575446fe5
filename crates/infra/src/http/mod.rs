//! HTTP transport shared by the token cache and the API operations

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
