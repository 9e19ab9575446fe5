//! Per-operation HTTP status tables
//!
//! Each operation has exactly one success status. Any other status goes
//! through the operation's table below; codes the table does not list map to
//! [`ApiError::Undefined`].

use brighthub_domain::ApiError;
use reqwest::StatusCode;

/// Signature shared by all status tables
pub type StatusMapper = fn(StatusCode) -> ApiError;

/// `POST /accounts/{account_id}/videos`
pub fn create_video_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN | StatusCode::UNPROCESSABLE_ENTITY => ApiError::IllegalField,
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        StatusCode::CONFLICT => ApiError::DuplicateReferenceId,
        StatusCode::TOO_MANY_REQUESTS => ApiError::TooManyRequests,
        other => ApiError::Undefined(other.as_u16()),
    }
}

/// `GET /accounts/{account_id}/videos/{video_id}/digital_master`
///
/// Shares the create-video table, including 409 as a duplicate reference id.
pub fn video_master_info_error(status: StatusCode) -> ApiError {
    create_video_error(status)
}

/// `PUT /accounts/{account_id}/folders/{folder_id}/videos/{video_id}`
pub fn add_video_to_folder_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::NotAvailable,
        StatusCode::NOT_FOUND => ApiError::ResourceNotFound,
        StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
        StatusCode::TOO_MANY_REQUESTS => ApiError::TooManyRequests,
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::InternalError,
        other => ApiError::Undefined(other.as_u16()),
    }
}

/// `POST /accounts/{account_id}/videos/{video_id}/ingest-requests`
pub fn ingest_video_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::BAD_REQUEST => ApiError::BadRequest,
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::DynamicDeliveryNotAllowed,
        StatusCode::UNPROCESSABLE_ENTITY => ApiError::IllegalField,
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::InternalError,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimitExceeded,
        other => ApiError::Undefined(other.as_u16()),
    }
}

/// `GET /accounts/{account_id}/profiles/{profile_id}`
pub fn ingest_profile_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::ResourceNotFound,
        StatusCode::CONFLICT => ApiError::ProfileError,
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::InternalError,
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimitExceeded,
        other => ApiError::Undefined(other.as_u16()),
    }
}
