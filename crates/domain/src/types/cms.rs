//! CMS API payloads (videos and digital masters)

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Publication state of a video
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoState {
    #[default]
    Active,
    Inactive,
}

impl_wire_enum_conversions!(VideoState {
    Active => "ACTIVE",
    Inactive => "INACTIVE",
});

/// Body of `POST /accounts/{account_id}/videos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideoRequest {
    pub name: String,
    pub description: String,
    pub long_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    pub state: VideoState,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl CreateVideoRequest {
    /// Start a request for an active video with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = long_description.into();
        self
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn with_state(mut self, state: VideoState) -> Self {
        self.state = state;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Identifiers of a newly created video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideoResponse {
    pub id: String,
    pub account_id: String,
}

/// Metadata of a video's digital master
///
/// Timestamps are kept as the opaque strings the API returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoMasterInfo {
    pub id: String,
    pub encoding_rate: i64,
    pub height: i64,
    pub width: i64,
    pub size: i64,
    pub duration: i64,
    pub created_at: String,
    pub updated_at: String,
}
