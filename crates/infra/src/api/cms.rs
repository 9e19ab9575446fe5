//! CMS API operations: videos, folders and digital masters

use brighthub_domain::{ApiError, CreateVideoRequest, CreateVideoResponse, VideoMasterInfo};
use reqwest::StatusCode;
use tracing::{error, info, instrument};
use urlencoding::encode;

use super::client::{BrighthubClient, Host};
use super::errors::{add_video_to_folder_error, create_video_error, video_master_info_error};

impl BrighthubClient {
    /// Create a video record
    ///
    /// `POST /accounts/{account_id}/videos`, expecting `201 Created`.
    ///
    /// # Errors
    ///
    /// 401 `Unauthorized`, 403/422 `IllegalField`, 405 `MethodNotAllowed`,
    /// 409 `DuplicateReferenceId`, 429 `TooManyRequests`, anything else
    /// `Undefined`.
    #[instrument(skip(self, request), fields(account_id = %self.account_id(), name = %request.name))]
    pub async fn create_video(
        &self,
        request: &CreateVideoRequest,
    ) -> Result<CreateVideoResponse, ApiError> {
        let url = self.account_url(Host::Cms, "/videos");

        let video: CreateVideoResponse = self
            .post(&url, request, StatusCode::CREATED, create_video_error)
            .await
            .inspect_err(|err| {
                if !err.is_status_error() {
                    error!(request = ?request, error = %err, "create video failed");
                }
            })?;

        info!(video_id = %video.id, "Video created");
        Ok(video)
    }

    /// Add a video to a folder
    ///
    /// `PUT /accounts/{account_id}/folders/{folder_id}/videos/{video_id}`,
    /// expecting `204 No Content`.
    ///
    /// # Errors
    ///
    /// 401 `Unauthorized`, 403 `NotAvailable`, 404 `ResourceNotFound`,
    /// 405 `MethodNotAllowed`, 429 `TooManyRequests`, 500 `InternalError`,
    /// anything else `Undefined`.
    #[instrument(skip(self), fields(account_id = %self.account_id()))]
    pub async fn add_video_to_folder(&self, video_id: &str, folder_id: &str) -> Result<(), ApiError> {
        let path = format!("/folders/{}/videos/{}", encode(folder_id), encode(video_id));
        let url = self.account_url(Host::Cms, &path);

        self.put_empty(&url, StatusCode::NO_CONTENT, add_video_to_folder_error).await.inspect_err(
            |err| {
                if !err.is_status_error() {
                    error!(video_id, folder_id, error = %err, "add video to folder failed");
                }
            },
        )?;

        info!(video_id, folder_id, "Video added to folder");
        Ok(())
    }

    /// Fetch the digital master metadata of a video
    ///
    /// `GET /accounts/{account_id}/videos/{video_id}/digital_master`,
    /// expecting `200 OK`. Failures use the same table as [`Self::create_video`].
    #[instrument(skip(self), fields(account_id = %self.account_id()))]
    pub async fn get_video_master_info(&self, video_id: &str) -> Result<VideoMasterInfo, ApiError> {
        let path = format!("/videos/{}/digital_master", encode(video_id));
        let url = self.account_url(Host::Cms, &path);

        self.get(&url, StatusCode::OK, video_master_info_error).await.inspect_err(|err| {
            if !err.is_status_error() {
                error!(video_id, error = %err, "get video master info failed");
            }
        })
    }
}
