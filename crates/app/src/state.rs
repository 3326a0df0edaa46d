use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use service::Credentials;

pub const APP_NAME: &str = "zaazu";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DB_FILE_NAME: &str = "db.sqlite";
pub const THUMBNAILS_DIR_NAME: &str = "thumbnails";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default listen address for the service
    pub listen_addr: String,

    /// OAuth2 client settings for the Drive backup actions
    pub drive: DriveConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriveConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Long-lived token obtained through the `auth` action
    pub refresh_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            drive: DriveConfig::default(),
        }
    }
}

impl DriveConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            redirect_uri: self.redirect_uri.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the zaazu directory (~/.zaazu)
    pub zaazu_dir: PathBuf,
    /// Path to the SQLite database
    pub db_path: PathBuf,
    /// Path to the thumbnails directory
    pub thumbnails_path: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the zaazu directory path (~/.zaazu)
    pub fn zaazu_dir() -> Result<PathBuf, StateError> {
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Initialize a new zaazu state directory
    pub fn init() -> Result<Self, StateError> {
        let zaazu_dir = Self::zaazu_dir()?;

        if zaazu_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&zaazu_dir)?;

        let thumbnails_path = zaazu_dir.join(THUMBNAILS_DIR_NAME);
        fs::create_dir_all(&thumbnails_path)?;

        // Create default config
        let config = AppConfig::default();
        let config_path = zaazu_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        // Create empty database (just touch the file, it will be initialized by the service)
        let db_path = zaazu_dir.join(DB_FILE_NAME);
        fs::write(&db_path, "")?;

        Ok(Self {
            zaazu_dir,
            db_path,
            thumbnails_path,
            config_path,
            config,
        })
    }

    /// Load existing state from the zaazu directory
    pub fn load() -> Result<Self, StateError> {
        let zaazu_dir = Self::zaazu_dir()?;

        if !zaazu_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let db_path = zaazu_dir.join(DB_FILE_NAME);
        let thumbnails_path = zaazu_dir.join(THUMBNAILS_DIR_NAME);
        let config_path = zaazu_dir.join(CONFIG_FILE_NAME);

        if !db_path.exists() {
            return Err(StateError::MissingFile(DB_FILE_NAME.to_string()));
        }
        if !thumbnails_path.exists() {
            return Err(StateError::MissingFile(THUMBNAILS_DIR_NAME.to_string()));
        }
        if !config_path.exists() {
            return Err(StateError::MissingFile(CONFIG_FILE_NAME.to_string()));
        }

        // Load config
        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            zaazu_dir,
            db_path,
            thumbnails_path,
            config_path,
            config,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("zaazu directory not initialized. Run 'zaazu init' first")]
    NotInitialized,

    #[error("zaazu directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}
