use serde::{Deserialize, Serialize};
use url::Url;

/// OAuth2 client configuration plus the admin session's refresh token.
/// Supplied by the caller on every request; never persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Base URLs for the Drive REST surface. Kept in service config so the
/// integration tests can swap in a local mock server.
#[derive(Debug, Clone)]
pub struct DriveEndpoints {
    /// metadata + listing + delete, e.g. https://www.googleapis.com
    pub api_base: Url,
    /// media uploads, e.g. https://www.googleapis.com
    pub upload_base: Url,
    /// OAuth2 token endpoint
    pub token_url: Url,
}

impl Default for DriveEndpoints {
    fn default() -> Self {
        Self {
            api_base: Url::parse("https://www.googleapis.com").expect("static url"),
            upload_base: Url::parse("https://www.googleapis.com").expect("static url"),
            token_url: Url::parse("https://oauth2.googleapis.com/token").expect("static url"),
        }
    }
}

impl DriveEndpoints {
    /// All three surfaces served by one base URL (mock servers).
    pub fn from_base(base: &Url) -> Self {
        let mut token_url = base.clone();
        token_url.set_path("/token");
        Self {
            api_base: base.clone(),
            upload_base: base.clone(),
            token_url,
        }
    }
}

/// Tokens returned by the OAuth2 token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Remote-storage identity of one backup file. Drive reports `size` as a
/// decimal string; `createdTime` is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupFile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of a `files.list` response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FileList {
    #[serde(default)]
    pub files: Vec<BackupFile>,
}
