mod common;

use axum::body::Body;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use common::{service_state, MockDrive};

use service::http_server;

fn drive_config() -> serde_json::Value {
    serde_json::json!({
        "clientId": "test-client",
        "clientSecret": "test-secret",
        "redirectUri": "http://localhost/oauth/callback",
        "refreshToken": "test-refresh-token",
    })
}

fn json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

#[tokio::test]
async fn unknown_action_is_rejected_without_remote_calls() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({
        "action": "restore",
        "config": drive_config(),
    });
    let response = app.oneshot(json_request("/api/v0/backup", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].is_string());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn upload_without_data_is_rejected_without_remote_calls() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({
        "action": "upload",
        "config": drive_config(),
    });
    let response = app.oneshot(json_request("/api/v0/backup", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("data"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn missing_config_is_rejected() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({ "action": "list" });
    let response = app.oneshot(json_request("/api/v0/backup", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("config"));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn upload_end_to_end_returns_the_documented_shape() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({
        "action": "upload",
        "data": { "foo": "bar" },
        "config": drive_config(),
    });
    let response = app.oneshot(json_request("/api/v0/backup", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;

    assert_eq!(json["success"], serde_json::json!(true));
    let file_id = json["fileId"].as_str().unwrap();
    assert!(!file_id.is_empty());
    let file_name = json["fileName"].as_str().unwrap();
    assert!(file_name.starts_with("zaazu-backup-"));
    assert!(file_name.ends_with(".json"));
    let size = json["size"].as_str().unwrap();
    assert!(size.ends_with(" KB"));
    assert!(json["message"].as_str().unwrap().contains(file_name));
}

#[tokio::test]
async fn cleanup_reports_deleted_count_and_failures() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let ids = mock.seed_backups(4);
    mock.fail_delete(&ids[0]);

    let body = serde_json::json!({
        "action": "cleanup",
        "keepCount": 1,
        "config": drive_config(),
    });
    let response = app.oneshot(json_request("/api/v0/backup", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["deletedCount"], serde_json::json!(2));
    assert_eq!(json["failed"].as_array().unwrap().len(), 1);
    assert_eq!(json["failed"][0]["fileId"].as_str().unwrap(), ids[0]);
}

fn multipart_request(uri: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
    const BOUNDARY: &str = "zaazu-test-boundary";

    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\r\n",
                    name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn thumbnail_upload_stores_the_file_and_returns_its_url() {
    let mock = MockDrive::spawn().await;
    let (state, tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let request = multipart_request(
        "/api/v0/thumbnails",
        &[
            ("type", None, b"videos"),
            ("id", None, b"video-42"),
            ("file", Some("cover.PNG"), b"fake image bytes"),
        ],
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], serde_json::json!(true));
    assert_eq!(
        json["url"].as_str().unwrap(),
        "/thumbnails/videos/video-42.png"
    );

    let stored = tmp.path().join("thumbnails/videos/video-42.png");
    let bytes = std::fs::read(stored).expect("thumbnail must exist on disk");
    assert_eq!(bytes, b"fake image bytes");
}

#[tokio::test]
async fn thumbnail_upload_rejects_unknown_type() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let request = multipart_request(
        "/api/v0/thumbnails",
        &[
            ("type", None, b"music"),
            ("id", None, b"song-1"),
            ("file", Some("cover.png"), b"bytes"),
        ],
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("type"));
}

#[tokio::test]
async fn thumbnail_upload_requires_an_id() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let request = multipart_request(
        "/api/v0/thumbnails",
        &[
            ("type", None, b"jogos"),
            ("file", Some("cover.png"), b"bytes"),
        ],
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn log_event_round_trip() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({
        "action": "video.update",
        "details": "changed title of v1",
        "user": "admin",
        "deviceInfo": "Firefox on Linux",
    });
    let response = app
        .clone()
        .oneshot(json_request("/api/v0/logs", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["success"], serde_json::json!(true));
    assert!(json["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn log_event_requires_the_three_core_fields() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let body = serde_json::json!({
        "action": "video.update",
        "details": "  ",
        "user": "admin",
    });
    let response = app.oneshot(json_request("/api/v0/logs", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("details"));
}

#[tokio::test]
async fn recent_log_events_come_back_newest_first() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    for i in 1..=3 {
        let body = serde_json::json!({
            "action": format!("video.update.{}", i),
            "details": "edit",
            "user": "admin",
        });
        let response = app
            .clone()
            .oneshot(json_request("/api/v0/logs", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let request = Request::builder()
        .method("GET")
        .uri("/api/v0/logs/recent?limit=2")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["action"], serde_json::json!("video.update.3"));
    assert_eq!(events[1]["action"], serde_json::json!("video.update.2"));
    assert_eq!(events[0]["user"], serde_json::json!("admin"));
}

#[tokio::test]
async fn log_endpoint_describes_itself_on_get() {
    let mock = MockDrive::spawn().await;
    let (state, _tmp) = service_state(&mock).await;
    let app = http_server::router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v0/logs")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["method"], serde_json::json!("POST"));
    assert!(json["required"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("user")));
}
