use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DriveError {
    #[error("a refresh token is required for this action")]
    MissingRefreshToken,
    #[error("token endpoint rejected the request ({status}): {message}")]
    TokenEndpoint { status: StatusCode, message: String },
    #[error("Drive API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl DriveError {
    /// Validation-class errors: the caller sent a request that can never
    /// succeed, as opposed to an upstream failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, DriveError::MissingRefreshToken)
    }
}
