//! Ingest notification payload
//!
//! Brightcove POSTs these to the callback URLs given in an ingest request.
//! The client never sends or receives them itself; the type exists for the
//! services that handle those callbacks.

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Create,
    Publish,
    #[default]
    #[serde(other)]
    Unknown,
}

impl_wire_enum_conversions!(Action {
    Create => "CREATE",
    Publish => "PUBLISH",
    _ => Unknown,
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Asset,
    DigitalMaster,
    DynamicRendition,
    Title,
    #[default]
    #[serde(other)]
    Unknown,
}

impl_wire_enum_conversions!(EntityType {
    Asset => "ASSET",
    DigitalMaster => "DIGITAL_MASTER",
    DynamicRendition => "DYNAMIC_RENDITION",
    Title => "TITLE",
    _ => Unknown,
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Success,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl_wire_enum_conversions!(NotificationStatus {
    Success => "SUCCESS",
    Failed => "FAILED",
    _ => Unknown,
});

/// Job-completion event for a Dynamic Ingest job
///
/// Every field is optional on the wire; absent enums decode as `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub entity: String,
    pub entity_type: EntityType,
    pub version: String,
    pub action: Action,
    pub job_id: String,
    pub video_id: String,
    pub dynamic_rendition_id: String,
    pub language: String,
    pub variant: String,
    pub account_id: String,
    pub status: NotificationStatus,
    pub error_message: String,
}

impl Notification {
    pub fn is_success(&self) -> bool {
        self.status == NotificationStatus::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == NotificationStatus::Failed
    }

    /// True when the whole title finished processing
    pub fn is_title_complete(&self) -> bool {
        self.entity_type == EntityType::Title && self.is_success()
    }
}
