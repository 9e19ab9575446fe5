//! Dynamic Ingest and Ingest Profiles API payloads

use serde::{Deserialize, Serialize};

use crate::impl_wire_enum_conversions;

/// Queue priority of an ingest job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
}

impl_wire_enum_conversions!(Priority {
    Low => "low",
    Normal => "normal",
});

/// Source of the master file to ingest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestMaster {
    pub url: String,
}

/// Body of `POST /accounts/{account_id}/videos/{video_id}/ingest-requests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestVideoRequest {
    pub master: IngestMaster,
    pub priority: Priority,
    #[serde(rename = "capture-images")]
    pub capture_images: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub callbacks: Vec<String>,
}

impl IngestVideoRequest {
    /// Ingest from `master_url` at normal priority, capturing images
    pub fn new(master_url: impl Into<String>) -> Self {
        Self {
            master: IngestMaster { url: master_url.into() },
            priority: Priority::Normal,
            capture_images: true,
            callbacks: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_capture_images(mut self, capture_images: bool) -> Self {
        self.capture_images = capture_images;
        self
    }

    pub fn with_callback(mut self, url: impl Into<String>) -> Self {
        self.callbacks.push(url.into());
        self
    }
}

/// Identifier of the created ingest job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestVideoResponse {
    pub id: String,
}

/// Rendition set used for Dynamic Delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicOrigin {
    pub renditions: Vec<String>,
}

/// Named ingest profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestProfile {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub dynamic_origin: DynamicOrigin,
}

impl IngestProfile {
    pub fn renditions(&self) -> &[String] {
        &self.dynamic_origin.renditions
    }
}
