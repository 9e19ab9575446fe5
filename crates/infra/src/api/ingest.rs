//! Dynamic Ingest and Ingest Profiles API operations

use brighthub_domain::{ApiError, IngestProfile, IngestVideoRequest, IngestVideoResponse};
use reqwest::StatusCode;
use tracing::{error, info, instrument};
use urlencoding::encode;

use super::client::{BrighthubClient, Host};
use super::errors::{ingest_profile_error, ingest_video_error};

impl BrighthubClient {
    /// Submit a Dynamic Ingest job for an existing video
    ///
    /// `POST /accounts/{account_id}/videos/{video_id}/ingest-requests` on the
    /// ingest host, expecting `200 OK`.
    ///
    /// # Errors
    ///
    /// 400 `BadRequest`, 401 `Unauthorized`, 403 `DynamicDeliveryNotAllowed`,
    /// 422 `IllegalField`, 429 `RateLimitExceeded`, 500 `InternalError`,
    /// anything else `Undefined`.
    #[instrument(skip(self, request), fields(account_id = %self.account_id()))]
    pub async fn ingest_video(
        &self,
        video_id: &str,
        request: &IngestVideoRequest,
    ) -> Result<IngestVideoResponse, ApiError> {
        let path = format!("/videos/{}/ingest-requests", encode(video_id));
        let url = self.account_url(Host::Ingest, &path);

        let job: IngestVideoResponse = self
            .post(&url, request, StatusCode::OK, ingest_video_error)
            .await
            .inspect_err(|err| {
                if !err.is_status_error() {
                    error!(video_id, request = ?request, error = %err, "ingest video failed");
                }
            })?;

        info!(video_id, job_id = %job.id, "Ingest job submitted");
        Ok(job)
    }

    /// Fetch an ingest profile
    ///
    /// `GET /accounts/{account_id}/profiles/{profile_id}` on the ingestion
    /// host, expecting `200 OK`.
    ///
    /// # Errors
    ///
    /// 401 `Unauthorized`, 404 `ResourceNotFound`, 409 `ProfileError`,
    /// 429 `RateLimitExceeded`, 500 `InternalError`, anything else `Undefined`.
    #[instrument(skip(self), fields(account_id = %self.account_id()))]
    pub async fn get_ingest_profile(&self, profile_id: &str) -> Result<IngestProfile, ApiError> {
        let path = format!("/profiles/{}", encode(profile_id));
        let url = self.account_url(Host::Ingestion, &path);

        self.get(&url, StatusCode::OK, ingest_profile_error).await.inspect_err(|err| {
            if !err.is_status_error() {
                error!(profile_id, error = %err, "get ingest profile failed");
            }
        })
    }
}
