use std::fmt;
use std::str::FromStr;

use axum::routing::post;
use axum::Router;

use crate::ServiceState;

pub mod upload;

// Re-export for convenience
pub use upload::{UploadResponse, UploadThumbnailError};

pub fn router(state: ServiceState) -> Router {
    Router::new()
        .route("/", post(upload::handler))
        .with_state(state)
}

/// Content section a thumbnail belongs to. The section names are the
/// on-disk directory names the admin panel links against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Videos,
    Jogos,
    Atividades,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Videos => "videos",
            MediaKind::Jogos => "jogos",
            MediaKind::Atividades => "atividades",
        }
    }
}

impl FromStr for MediaKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "videos" => Ok(MediaKind::Videos),
            "jogos" => Ok(MediaKind::Jogos),
            "atividades" => Ok(MediaKind::Atividades),
            _ => Err(()),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
