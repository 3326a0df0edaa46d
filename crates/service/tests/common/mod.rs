#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use url::Url;

use service::drive::BACKUP_FOLDER_NAME;
use service::{Credentials, DriveEndpoints, ServiceConfig, ServiceState};

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// In-memory stand-in for the Drive REST API: token endpoint, files
/// query/create, media upload, download, delete. Enough semantics to
/// exercise the whole backup workflow without the network.
#[derive(Default)]
pub struct MockDriveState {
    next_id: usize,
    seq: usize,
    pub folders: Vec<MockEntry>,
    pub files: HashMap<String, MockEntry>,
    /// ids whose DELETE will fail with a 500
    pub fail_delete: HashSet<String>,
    /// every handled request, token endpoint included
    pub requests: usize,
}

#[derive(Debug, Clone)]
pub struct MockEntry {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub created_seq: usize,
}

impl MockDriveState {
    fn allocate(&mut self, prefix: &str) -> (String, usize) {
        self.next_id += 1;
        self.seq += 1;
        (format!("{}-{}", prefix, self.next_id), self.seq)
    }

    fn created_time(seq: usize) -> String {
        format!("2026-01-01T00:00:00.{:03}Z", seq)
    }
}

type Shared = Arc<Mutex<MockDriveState>>;

pub struct MockDrive {
    pub url: Url,
    pub state: Shared,
}

impl MockDrive {
    pub async fn spawn() -> MockDrive {
        let state: Shared = Arc::default();

        let app = Router::new()
            .route("/token", post(token))
            .route("/drive/v3/files", get(list_files).post(create_file))
            .route("/drive/v3/files/:id", get(download).delete(delete_file))
            .route("/upload/drive/v3/files/:id", patch(upload_media))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock drive");
        let addr = listener.local_addr().expect("mock drive addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        MockDrive {
            url: Url::parse(&format!("http://{}", addr)).expect("mock drive url"),
            state,
        }
    }

    pub fn endpoints(&self) -> DriveEndpoints {
        DriveEndpoints::from_base(&self.url)
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests
    }

    pub fn folder_count(&self) -> usize {
        self.state.lock().unwrap().folders.len()
    }

    pub fn file_names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<_> = state.files.values().cloned().collect();
        entries.sort_by(|a, b| b.created_seq.cmp(&a.created_seq));
        entries.into_iter().map(|e| e.name).collect()
    }

    pub fn fail_delete(&self, id: &str) {
        self.state.lock().unwrap().fail_delete.insert(id.to_string());
    }

    /// Pre-populate the container plus `count` backup files, oldest
    /// first. Returns the file ids in creation order.
    pub fn seed_backups(&self, count: usize) -> Vec<String> {
        let mut state = self.state.lock().unwrap();
        if state.folders.is_empty() {
            let (id, seq) = state.allocate("folder");
            state.folders.push(MockEntry {
                id,
                name: BACKUP_FOLDER_NAME.to_string(),
                parent: Some("root".to_string()),
                description: None,
                content: None,
                created_seq: seq,
            });
        }
        let folder_id = state.folders[0].id.clone();

        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let (id, seq) = state.allocate("file");
            state.files.insert(
                id.clone(),
                MockEntry {
                    id: id.clone(),
                    name: format!("zaazu-backup-seed-{:03}.json", i),
                    parent: Some(folder_id.clone()),
                    description: None,
                    content: Some("{}".to_string()),
                    created_seq: seq,
                },
            );
            ids.push(id);
        }
        ids
    }
}

/// Credentials carrying a refresh token the mock accepts.
pub fn credentials() -> Credentials {
    Credentials {
        client_id: "test-client".to_string(),
        client_secret: "test-secret".to_string(),
        redirect_uri: "http://localhost/oauth/callback".to_string(),
        refresh_token: Some("test-refresh-token".to_string()),
    }
}

/// Service state wired to the mock; the TempDir owns the thumbnail root
/// and must outlive the state.
pub async fn service_state(mock: &MockDrive) -> (ServiceState, tempfile::TempDir) {
    let temp_dir = tempfile::TempDir::new().expect("failed to create temp dir");

    let config = ServiceConfig {
        http_listen_addr: None,
        sqlite_path: None,
        thumbnail_root: Some(temp_dir.path().join("thumbnails")),
        drive_endpoints: mock.endpoints(),
        log_level: tracing::Level::INFO,
    };
    let state = ServiceState::from_config(&config)
        .await
        .expect("failed to build service state");

    (state, temp_dir)
}

async fn token(State(state): State<Shared>) -> Json<serde_json::Value> {
    state.lock().unwrap().requests += 1;
    Json(serde_json::json!({
        "access_token": "mock-access-token",
        "refresh_token": "mock-refresh-token",
        "expires_in": 3599,
        "token_type": "Bearer",
    }))
}

async fn list_files(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let mut state = state.lock().unwrap();
    state.requests += 1;

    let q = params.get("q").cloned().unwrap_or_default();
    let page_size = params
        .get("pageSize")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);

    let mut entries: Vec<MockEntry> = if q.contains(FOLDER_MIME_TYPE) {
        let name = quoted(&q, 0).unwrap_or_default();
        state
            .folders
            .iter()
            .filter(|f| f.name == name)
            .cloned()
            .collect()
    } else {
        let parent = quoted(&q, 0).unwrap_or_default();
        let needle = quoted(&q, 1).unwrap_or_default();
        state
            .files
            .values()
            .filter(|f| f.parent.as_deref() == Some(parent.as_str()))
            .filter(|f| f.name.contains(&needle))
            .cloned()
            .collect()
    };

    // createdTime desc
    entries.sort_by(|a, b| b.created_seq.cmp(&a.created_seq));
    entries.truncate(page_size);

    let files: Vec<serde_json::Value> = entries
        .iter()
        .map(|e| {
            serde_json::json!({
                "id": e.id,
                "name": e.name,
                "size": e.content.as_ref().map(|c| c.len().to_string()),
                "createdTime": MockDriveState::created_time(e.created_seq),
                "description": e.description,
            })
        })
        .collect();

    Json(serde_json::json!({ "files": files }))
}

async fn create_file(
    State(state): State<Shared>,
    Json(metadata): Json<serde_json::Value>,
) -> Json<serde_json::Value> {
    let mut state = state.lock().unwrap();
    state.requests += 1;

    let name = metadata["name"].as_str().unwrap_or_default().to_string();
    let parent = metadata["parents"][0].as_str().map(|s| s.to_string());
    let description = metadata["description"].as_str().map(|s| s.to_string());

    if metadata["mimeType"].as_str() == Some(FOLDER_MIME_TYPE) {
        let (id, seq) = state.allocate("folder");
        state.folders.push(MockEntry {
            id: id.clone(),
            name: name.clone(),
            parent,
            description,
            content: None,
            created_seq: seq,
        });
        return Json(serde_json::json!({ "id": id, "name": name }));
    }

    let (id, seq) = state.allocate("file");
    state.files.insert(
        id.clone(),
        MockEntry {
            id: id.clone(),
            name: name.clone(),
            parent,
            description,
            content: None,
            created_seq: seq,
        },
    );
    Json(serde_json::json!({ "id": id, "name": name }))
}

async fn upload_media(
    State(state): State<Shared>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    let mut state = state.lock().unwrap();
    state.requests += 1;

    match state.files.get_mut(&id) {
        Some(file) => {
            file.content = Some(body.clone());
            Json(serde_json::json!({
                "id": file.id,
                "name": file.name,
                "size": body.len().to_string(),
            }))
            .into_response()
        }
        None => (
            http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "file not found" })),
        )
            .into_response(),
    }
}

async fn download(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    state.requests += 1;

    match state.files.get(&id).and_then(|f| f.content.clone()) {
        Some(content) => (
            [(http::header::CONTENT_TYPE, "application/json")],
            content,
        )
            .into_response(),
        None => (
            http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "file not found" })),
        )
            .into_response(),
    }
}

async fn delete_file(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = state.lock().unwrap();
    state.requests += 1;

    if state.fail_delete.contains(&id) {
        return (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": "backend storage error" })),
        )
            .into_response();
    }
    match state.files.remove(&id) {
        Some(_) => http::StatusCode::NO_CONTENT.into_response(),
        None => (
            http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "file not found" })),
        )
            .into_response(),
    }
}

/// n-th single-quoted segment of a Drive query string.
fn quoted(q: &str, n: usize) -> Option<String> {
    let mut parts = q.split('\'').skip(1).step_by(2);
    parts.nth(n).map(|s| s.to_string())
}
