//! Request and response payloads exchanged with the Brightcove APIs

pub mod cms;
pub mod ingest;
pub mod notification;

pub use cms::{CreateVideoRequest, CreateVideoResponse, VideoMasterInfo, VideoState};
pub use ingest::{
    DynamicOrigin, IngestMaster, IngestProfile, IngestVideoRequest, IngestVideoResponse, Priority,
};
pub use notification::{Action, EntityType, Notification, NotificationStatus};
