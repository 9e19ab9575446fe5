//! Integration tests for the CMS operations against a mock API

mod support;

use brighthub_domain::{ApiError, CreateVideoRequest, VideoState};
use support::{account_path, connected_client};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_status(server: &MockServer, http_method: &str, route: &str, status: u16) {
    Mock::given(method(http_method))
        .and(path(account_path(route)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_video_returns_created_record() {
    let (server, client) = connected_client().await;

    Mock::given(method("POST"))
        .and(path(account_path("/videos")))
        .and(body_json(serde_json::json!({
            "name": "kucing lucu",
            "description": "kucing",
            "long_description": "",
            "reference_id": "ref-1",
            "state": "ACTIVE",
            "tags": ["kucing"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "id-video-lucu",
            "account_id": "account-id-kamu"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateVideoRequest::new("kucing lucu")
        .with_description("kucing")
        .with_reference_id("ref-1")
        .with_state(VideoState::Active)
        .with_tags(["kucing"]);
    let video = client.create_video(&request).await.unwrap();

    assert_eq!(video.id, "id-video-lucu");
    assert_eq!(video.account_id, "account-id-kamu");
}

#[tokio::test]
async fn create_video_maps_documented_statuses() {
    let cases = [
        (401, ApiError::Unauthorized),
        (403, ApiError::IllegalField),
        (405, ApiError::MethodNotAllowed),
        (409, ApiError::DuplicateReferenceId),
        (422, ApiError::IllegalField),
        (429, ApiError::TooManyRequests),
        (500, ApiError::Undefined(500)),
        (200, ApiError::Undefined(200)),
    ];

    for (status, expected) in cases {
        let (server, client) = connected_client().await;
        mount_status(&server, "POST", "/videos", status).await;

        let err = client.create_video(&CreateVideoRequest::new("v")).await.unwrap_err();
        assert_eq!(err, expected, "status {status}");
    }
}

#[tokio::test]
async fn add_video_to_folder_accepts_no_content() {
    let (server, client) = connected_client().await;

    Mock::given(method("PUT"))
        .and(path(account_path("/folders/folder-1/videos/video-1")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.add_video_to_folder("video-1", "folder-1").await.unwrap();
}

#[tokio::test]
async fn add_video_to_folder_maps_documented_statuses() {
    let cases = [
        (401, ApiError::Unauthorized),
        (403, ApiError::NotAvailable),
        (404, ApiError::ResourceNotFound),
        (405, ApiError::MethodNotAllowed),
        (429, ApiError::TooManyRequests),
        (500, ApiError::InternalError),
        (200, ApiError::Undefined(200)),
        (502, ApiError::Undefined(502)),
    ];

    for (status, expected) in cases {
        let (server, client) = connected_client().await;
        mount_status(&server, "PUT", "/folders/f/videos/v", status).await;

        let err = client.add_video_to_folder("v", "f").await.unwrap_err();
        assert_eq!(err, expected, "status {status}");
    }
}

#[tokio::test]
async fn get_video_master_info_decodes_full_record() {
    let (server, client) = connected_client().await;

    Mock::given(method("GET"))
        .and(path(account_path("/videos/video-1/digital_master")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "1234567890",
            "encoding_rate": 3_405_000_i64,
            "height": 1080,
            "width": 1920,
            "size": 5_368_709_120_i64,
            "duration": 187_300,
            "created_at": "2019-02-25T20:29:42.543Z",
            "updated_at": "2019-02-25T20:31:00.001Z"
        })))
        .mount(&server)
        .await;

    let info = client.get_video_master_info("video-1").await.unwrap();

    assert_eq!(info.id, "1234567890");
    assert_eq!(info.encoding_rate, 3_405_000);
    assert_eq!(info.height, 1080);
    assert_eq!(info.width, 1920);
    assert_eq!(info.size, 5_368_709_120);
    assert_eq!(info.duration, 187_300);
    assert_eq!(info.created_at, "2019-02-25T20:29:42.543Z");
    assert_eq!(info.updated_at, "2019-02-25T20:31:00.001Z");
}

#[tokio::test]
async fn get_video_master_info_uses_create_video_table() {
    let cases = [
        (401, ApiError::Unauthorized),
        (403, ApiError::IllegalField),
        (405, ApiError::MethodNotAllowed),
        (409, ApiError::DuplicateReferenceId),
        (422, ApiError::IllegalField),
        (429, ApiError::TooManyRequests),
        (404, ApiError::Undefined(404)),
    ];

    for (status, expected) in cases {
        let (server, client) = connected_client().await;
        mount_status(&server, "GET", "/videos/v/digital_master", status).await;

        let err = client.get_video_master_info("v").await.unwrap_err();
        assert_eq!(err, expected, "status {status}");
    }
}

#[tokio::test]
async fn malformed_success_body_is_decode_error() {
    let (server, client) = connected_client().await;

    Mock::given(method("POST"))
        .and(path(account_path("/videos")))
        .respond_with(ResponseTemplate::new(201).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.create_video(&CreateVideoRequest::new("v")).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!err.is_status_error());
}
