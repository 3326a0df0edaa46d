use reqwest::{Client, Response};
use url::Url;

use super::error::DriveError;
use super::types::{BackupFile, Credentials, DriveEndpoints, FileList, TokenGrant};

/// Well-known container for all backup files, created under the Drive root.
pub const BACKUP_FOLDER_NAME: &str = "Zaazu_Backups";
/// Name prefix shared by every backup file; also the listing filter.
pub const BACKUP_FILE_PREFIX: &str = "zaazu-backup";

const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Request-scoped Drive client. Built fresh from caller-supplied
/// credentials on every request; the access token fetched through the
/// refresh grant lives only as long as this instance.
pub struct DriveClient {
    credentials: Credentials,
    endpoints: DriveEndpoints,
    http: Client,
    access_token: Option<String>,
}

impl DriveClient {
    pub fn new(credentials: Credentials, endpoints: DriveEndpoints) -> Result<Self, DriveError> {
        let http = Client::builder().build()?;
        Ok(Self {
            credentials,
            endpoints,
            http,
            access_token: None,
        })
    }

    /// Trade an authorization code for tokens. The only operation that
    /// works without a refresh token.
    pub async fn exchange_code(&self, auth_code: &str) -> Result<TokenGrant, DriveError> {
        let params = [
            ("code", auth_code),
            ("client_id", &self.credentials.client_id),
            ("client_secret", &self.credentials.client_secret),
            ("redirect_uri", &self.credentials.redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(self.endpoints.token_url.clone())
            .form(&params)
            .send()
            .await?;
        let response = check_token_response(response).await?;

        Ok(response.json::<TokenGrant>().await?)
    }

    /// Access token for data calls, fetched once per client instance via
    /// the refresh-token grant.
    async fn access_token(&mut self) -> Result<String, DriveError> {
        if let Some(token) = &self.access_token {
            return Ok(token.clone());
        }

        let refresh_token = self
            .credentials
            .refresh_token
            .as_deref()
            .ok_or(DriveError::MissingRefreshToken)?;
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http
            .post(self.endpoints.token_url.clone())
            .form(&params)
            .send()
            .await?;
        let response = check_token_response(response).await?;
        let grant = response.json::<TokenGrant>().await?;

        self.access_token = Some(grant.access_token.clone());
        Ok(grant.access_token)
    }

    /// Find the backup container, without creating it. When duplicates
    /// exist from a past find-or-create race, the most recently created
    /// match wins.
    pub async fn find_backup_folder(&mut self) -> Result<Option<String>, DriveError> {
        let token = self.access_token().await?;
        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            BACKUP_FOLDER_NAME, FOLDER_MIME_TYPE
        );

        let response = self
            .http
            .get(self.files_url(None)?)
            .bearer_auth(&token)
            .query(&[
                ("q", query.as_str()),
                ("orderBy", "createdTime desc"),
                ("pageSize", "10"),
                ("fields", "files(id, name, createdTime)"),
            ])
            .send()
            .await?;
        let list = check_response(response).await?.json::<FileList>().await?;

        Ok(list.files.into_iter().next().map(|f| f.id))
    }

    /// Find-or-create the backup container. Not transactional: two
    /// concurrent callers can both create one (see find_backup_folder
    /// for how duplicates are resolved afterwards).
    pub async fn ensure_backup_folder(&mut self) -> Result<String, DriveError> {
        if let Some(id) = self.find_backup_folder().await? {
            return Ok(id);
        }

        let token = self.access_token().await?;
        let metadata = serde_json::json!({
            "name": BACKUP_FOLDER_NAME,
            "mimeType": FOLDER_MIME_TYPE,
            "parents": ["root"],
        });

        let response = self
            .http
            .post(self.files_url(None)?)
            .bearer_auth(&token)
            .query(&[("fields", "id")])
            .json(&metadata)
            .send()
            .await?;
        let folder = check_response(response).await?.json::<BackupFile>().await?;

        tracing::info!(folder_id = %folder.id, "created backup folder");
        Ok(folder.id)
    }

    /// Upload a JSON document into the container: create the file
    /// metadata, then upload the content as media.
    pub async fn upload_json(
        &mut self,
        folder_id: &str,
        name: &str,
        content: &str,
        description: &str,
    ) -> Result<BackupFile, DriveError> {
        let token = self.access_token().await?;

        let metadata = serde_json::json!({
            "name": name,
            "parents": [folder_id],
            "mimeType": "application/json",
            "description": description,
        });
        let response = self
            .http
            .post(self.files_url(None)?)
            .bearer_auth(&token)
            .query(&[("fields", "id, name")])
            .json(&metadata)
            .send()
            .await?;
        let created = check_response(response).await?.json::<BackupFile>().await?;

        let mut upload_url = self
            .endpoints
            .upload_base
            .join(&format!("/upload/drive/v3/files/{}", created.id))?;
        upload_url
            .query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("fields", "id, name, size");
        let response = self
            .http
            .patch(upload_url)
            .bearer_auth(&token)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(content.to_string())
            .send()
            .await?;
        let file = check_response(response).await?.json::<BackupFile>().await?;

        Ok(file)
    }

    /// Backup files inside the container, newest first, capped at
    /// `page_size`.
    pub async fn list_backups(
        &mut self,
        folder_id: &str,
        page_size: u32,
    ) -> Result<Vec<BackupFile>, DriveError> {
        let token = self.access_token().await?;
        let query = format!(
            "'{}' in parents and name contains '{}' and trashed = false",
            folder_id, BACKUP_FILE_PREFIX
        );
        let page_size = page_size.to_string();

        let response = self
            .http
            .get(self.files_url(None)?)
            .bearer_auth(&token)
            .query(&[
                ("q", query.as_str()),
                ("orderBy", "createdTime desc"),
                ("pageSize", page_size.as_str()),
                ("fields", "files(id, name, size, createdTime, description)"),
            ])
            .send()
            .await?;
        let list = check_response(response).await?.json::<FileList>().await?;

        Ok(list.files)
    }

    /// Fetch a file's raw content and parse it as JSON.
    pub async fn download(&mut self, file_id: &str) -> Result<serde_json::Value, DriveError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .get(self.files_url(Some(file_id))?)
            .bearer_auth(&token)
            .query(&[("alt", "media")])
            .send()
            .await?;
        let payload = check_response(response).await?.json().await?;

        Ok(payload)
    }

    /// Permanently delete one file.
    pub async fn delete_file(&mut self, file_id: &str) -> Result<(), DriveError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .delete(self.files_url(Some(file_id))?)
            .bearer_auth(&token)
            .send()
            .await?;
        check_response(response).await?;

        Ok(())
    }

    fn files_url(&self, file_id: Option<&str>) -> Result<Url, DriveError> {
        let path = match file_id {
            Some(id) => format!("/drive/v3/files/{}", id),
            None => "/drive/v3/files".to_string(),
        };
        Ok(self.endpoints.api_base.join(&path)?)
    }
}

async fn check_response(response: Response) -> Result<Response, DriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(DriveError::Api { status, message })
}

async fn check_token_response(response: Response) -> Result<Response, DriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(DriveError::TokenEndpoint { status, message })
}
