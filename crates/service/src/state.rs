use std::path::PathBuf;

use url::Url;

use super::config::Config;
use super::database::{Database, DatabaseSetupError};
use crate::drive::DriveEndpoints;

#[derive(Clone)]
pub struct State {
    database: Database,
    thumbnail_root: PathBuf,
    drive_endpoints: DriveEndpoints,
}

impl State {
    pub async fn from_config(config: &Config) -> Result<Self, StateSetupError> {
        let sqlite_database_url = match config.sqlite_path {
            Some(ref path) => {
                // check that the path exists
                if !path.exists() {
                    return Err(StateSetupError::DatabasePathDoesNotExist);
                }
                // parse the path into a URL
                Url::parse(&format!("sqlite://{}", path.display()))
                    .map_err(|_| StateSetupError::InvalidDatabaseUrl)
            }
            // otherwise just set up an in-memory database
            None => Url::parse("sqlite::memory:").map_err(|_| StateSetupError::InvalidDatabaseUrl),
        }?;
        tracing::info!("Database URL: {:?}", sqlite_database_url);
        let database = Database::connect(&sqlite_database_url).await?;

        let thumbnail_root = config
            .thumbnail_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("public/thumbnails"));
        std::fs::create_dir_all(&thumbnail_root)?;
        tracing::info!("Thumbnail root: {:?}", thumbnail_root);

        Ok(Self {
            database,
            thumbnail_root,
            drive_endpoints: config.drive_endpoints.clone(),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn thumbnail_root(&self) -> &PathBuf {
        &self.thumbnail_root
    }

    pub fn drive_endpoints(&self) -> &DriveEndpoints {
        &self.drive_endpoints
    }
}

impl AsRef<Database> for State {
    fn as_ref(&self) -> &Database {
        &self.database
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateSetupError {
    #[error("Database path does not exist")]
    DatabasePathDoesNotExist,
    #[error("Database setup error")]
    DatabaseSetupError(#[from] DatabaseSetupError),
    #[error("Invalid database URL")]
    InvalidDatabaseUrl,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
