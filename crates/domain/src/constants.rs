//! Platform constants
//!
//! Default endpoints and timing values used when no configuration overrides
//! them.

// Default API hosts
pub const DEFAULT_AUTH_BASE_URL: &str = "https://oauth.brightcove.com/v4";
pub const DEFAULT_CMS_BASE_URL: &str = "https://cms.api.brightcove.com/v1";
pub const DEFAULT_INGEST_BASE_URL: &str = "https://ingest.api.brightcove.com/v1";
pub const DEFAULT_INGESTION_BASE_URL: &str = "https://ingestion.api.brightcove.com/v1";

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

// Access tokens expire after 5 minutes upstream; reuse them for at most 4.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 240;
