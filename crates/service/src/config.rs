use std::{net::SocketAddr, path::PathBuf};

use crate::drive::DriveEndpoints;

#[derive(Debug, Clone)]
pub struct Config {
    // http server configuration
    /// address for the http server to listen on.
    ///  if not set then 0.0.0.0:3000 will be used
    pub http_listen_addr: Option<SocketAddr>,

    // data store configuration
    /// a path to a sqlite database, if not set then an
    ///  in-memory database will be used
    pub sqlite_path: Option<PathBuf>,
    /// root directory for uploaded thumbnails, if not set
    ///  then ./public/thumbnails will be used
    pub thumbnail_root: Option<PathBuf>,

    // remote storage configuration
    /// endpoints for the Google Drive API. Default is the
    ///  public Google endpoints; tests point these at a mock
    pub drive_endpoints: DriveEndpoints,

    // misc
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_listen_addr: None,
            sqlite_path: None,
            thumbnail_root: None,
            drive_endpoints: DriveEndpoints::default(),
            log_level: tracing::Level::INFO,
        }
    }
}
