//! # Brighthub Domain
//!
//! Data types shared by the brighthub client.
//!
//! This crate contains:
//! - Request/response payloads for the CMS and Dynamic Ingest APIs
//! - The notification payload delivered by ingest callbacks
//! - The `ApiError` taxonomy and `Result` alias
//! - Credentials and client configuration structures
//!
//! ## Architecture
//! - No dependencies on other brighthub crates
//! - No I/O; the HTTP side lives in `brighthub-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
