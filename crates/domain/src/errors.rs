//! Error types used throughout the client
//!
//! Every documented failure of the Brightcove APIs maps to exactly one
//! variant. HTTP statuses outside an operation's table surface as
//! [`ApiError::Undefined`] carrying the raw code.

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors, for callers deciding on retry or alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Credentials rejected or token acquisition failed
    Authentication,
    /// Request volume or concurrent job limits hit (429)
    RateLimit,
    /// Upstream failure or temporary unavailability
    Server,
    /// The request itself was rejected - non-retryable
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Local configuration errors - non-retryable
    Config,
}

/// Errors returned by client operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("spelling error or other use of non-existent field")]
    IllegalField,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("duplicate reference id")]
    DuplicateReferenceId,

    #[error("too many request")]
    TooManyRequests,

    #[error("the resource you are requesting is temporarily unavailable")]
    NotAvailable,

    #[error("the api could not find the resource you requested")]
    ResourceNotFound,

    #[error("internal error, please try again later")]
    InternalError,

    #[error("unable to parse request body")]
    BadRequest,

    #[error(
        "this account is not enabled for Dynamic Delivery, but a Dynamic Delivery profile was specified"
    )]
    DynamicDeliveryNotAllowed,

    #[error(
        "dynamic ingest job not created. reduce the number of concurrent jobs for this account before trying again"
    )]
    RateLimitExceeded,

    #[error("profile rendition count exceeds configured rendition limit")]
    ProfileError,

    #[error("undefined error with code {0}")]
    Undefined(u16),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized | Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::TooManyRequests | Self::RateLimitExceeded => ApiErrorCategory::RateLimit,
            Self::NotAvailable | Self::InternalError | Self::Decode(_) => ApiErrorCategory::Server,
            Self::IllegalField
            | Self::MethodNotAllowed
            | Self::DuplicateReferenceId
            | Self::ResourceNotFound
            | Self::BadRequest
            | Self::DynamicDeliveryNotAllowed
            | Self::ProfileError
            | Self::Serialization(_) => ApiErrorCategory::Client,
            Self::Undefined(code) => match code {
                401 => ApiErrorCategory::Authentication,
                429 => ApiErrorCategory::RateLimit,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Check whether a caller could reasonably retry the operation
    ///
    /// The client never retries on its own; this only classifies.
    pub fn should_retry(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Authentication
                | ApiErrorCategory::RateLimit
                | ApiErrorCategory::Server
                | ApiErrorCategory::Network
        )
    }

    /// Whether this error came from the HTTP status table of an operation
    pub fn is_status_error(&self) -> bool {
        !matches!(
            self,
            Self::Auth(_)
                | Self::Network(_)
                | Self::Serialization(_)
                | Self::Decode(_)
                | Self::Timeout(_)
                | Self::Config(_)
        )
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Unauthorized.category(), ApiErrorCategory::Authentication);
        assert_eq!(ApiError::Auth("test".to_string()).category(), ApiErrorCategory::Authentication);
        assert_eq!(ApiError::TooManyRequests.category(), ApiErrorCategory::RateLimit);
        assert_eq!(ApiError::RateLimitExceeded.category(), ApiErrorCategory::RateLimit);
        assert_eq!(ApiError::InternalError.category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::DuplicateReferenceId.category(), ApiErrorCategory::Client);
        assert_eq!(ApiError::Network("test".to_string()).category(), ApiErrorCategory::Network);
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(5)).category(),
            ApiErrorCategory::Network
        );
    }

    #[test]
    fn test_undefined_category_follows_status_class() {
        assert_eq!(ApiError::Undefined(503).category(), ApiErrorCategory::Server);
        assert_eq!(ApiError::Undefined(418).category(), ApiErrorCategory::Client);
        assert_eq!(ApiError::Undefined(200).category(), ApiErrorCategory::Client);
    }

    #[test]
    fn test_should_retry() {
        assert!(ApiError::Unauthorized.should_retry());
        assert!(ApiError::RateLimitExceeded.should_retry());
        assert!(ApiError::InternalError.should_retry());
        assert!(ApiError::Network("test".to_string()).should_retry());
        assert!(!ApiError::IllegalField.should_retry());
        assert!(!ApiError::ProfileError.should_retry());
        assert!(!ApiError::Config("test".to_string()).should_retry());
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Undefined(418).to_string(), "undefined error with code 418");
        assert_eq!(ApiError::TooManyRequests.to_string(), "too many request");
        assert_eq!(
            ApiError::ResourceNotFound.to_string(),
            "the api could not find the resource you requested"
        );
    }

    #[test]
    fn test_status_error_classification() {
        assert!(ApiError::BadRequest.is_status_error());
        assert!(ApiError::Undefined(302).is_status_error());
        assert!(!ApiError::Decode("eof".to_string()).is_status_error());
        assert!(!ApiError::Auth("denied".to_string()).is_status_error());
    }
}
